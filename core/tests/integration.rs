//! Full view flow against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every controller
//! through a `Transport` backed by ureq. Validates that request building,
//! response parsing and state handling work end-to-end over real HTTP.

use storefront_core::{
    Confirm, DeleteOutcome, DetailView, Field, FormMode, HttpMethod, HttpRequest, HttpResponse,
    Navigate, Notify, Price, ProductClient, ProductsApi, Route, Transport, TransportError, View,
};

/// Executes requests with ureq, returning 4xx/5xx as data.
///
/// A reduced copy of the CLI's transport: no timeout and no response header
/// mapping, since nothing here reads headers. `core` cannot depend on the
/// binary crate.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = &self.agent;
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => {
                agent.post(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                agent.put(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

#[derive(Default)]
struct ScriptedUi {
    confirm: bool,
    notices: Vec<String>,
    navigations: Vec<Route>,
}

impl Confirm for ScriptedUi {
    fn confirm(&mut self, _message: &str) -> bool {
        self.confirm
    }
}

impl Notify for ScriptedUi {
    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

impl Navigate for ScriptedUi {
    fn navigate(&mut self, route: Route) {
        self.navigations.push(route);
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/")
}

#[test]
fn storefront_flow() {
    // Step 1: start mock server on a random port.
    let base_url = start_server();
    let api = ProductsApi::new(ProductClient::new(&base_url), UreqTransport::new());
    let mut ui = ScriptedUi {
        confirm: true,
        ..Default::default()
    };

    // Step 2: list view loads the seed catalog in server order.
    let mut view = View::for_route(Route::resolve("/").route);
    view.activate(&api);
    let View::List(mut list) = view else {
        panic!("expected list view");
    };
    let ids: Vec<_> = list.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    // Step 3: delete removes locally even though the server keeps it.
    assert_eq!(list.delete(&api, &mut ui, 2), DeleteOutcome::Deleted);
    assert!(list.products().iter().all(|p| p.id != 2));
    assert_eq!(api.list().unwrap().len(), 5);

    // Step 4: detail view for an existing product.
    let mut view = View::for_route(Route::resolve("/product/3").route);
    view.activate(&api);
    let View::Detail(mut detail) = view else {
        panic!("expected detail view");
    };
    assert!(matches!(detail.view(), DetailView::Ready(p) if p.title == "Cotton Jacket"));

    // Step 5: an unknown id is reported as not found.
    detail.set_id(999, &api);
    assert_eq!(detail.view(), DetailView::NotFound);

    // Step 6: edit form pre-populates and submits a PUT.
    let mut view = View::for_route(Route::resolve("/edit/1").route);
    view.activate(&api);
    let View::Form(mut form) = view else {
        panic!("expected form view");
    };
    assert_eq!(form.mode(), FormMode::Edit(1));
    assert_eq!(form.fields().price, Price::Number(109.95));
    form.change(Field::Title, "Renamed backpack");
    assert!(form.submit(&api, &mut ui));
    assert_eq!(form.saved().map(|p| p.title.as_str()), Some("Renamed backpack"));

    // Step 7: create form posts the typed values.
    let mut view = View::for_route(Route::resolve("/create").route);
    view.activate(&api);
    let View::Form(mut form) = view else {
        panic!("expected form view");
    };
    for (name, value) in [
        ("title", "Lamp"),
        ("price", "19.50"),
        ("description", "Desk lamp"),
        ("image", "https://img.test/lamp.png"),
        ("category", "home"),
    ] {
        form.change_named(name, value).unwrap();
    }
    assert!(form.submit(&api, &mut ui));
    let created = form.saved().unwrap();
    assert_eq!(created.id, 6);
    assert_eq!(created.price, Price::Text("19.50".to_string()));

    // Step 8: both submissions went back to the list, once each.
    assert_eq!(ui.navigations, vec![Route::List, Route::List]);

    // Step 9: unknown paths fall back to the list.
    let resolved = Route::resolve("/does/not/exist");
    assert!(resolved.redirected);
    assert_eq!(resolved.route, Route::List);
}

#[test]
fn unreachable_server_is_a_load_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ProductsApi::new(ProductClient::new(&format!("http://{addr}")), UreqTransport::new());
    let mut view = View::for_route(Route::List);
    view.activate(&api);
    let View::List(list) = view else {
        panic!("expected list view");
    };
    assert_eq!(list.state().error(), Some("Failed to load products"));
}
