//! `storefront`: terminal front end for the demo store catalog.

mod config;
mod render;
mod terminal;
mod transport;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use storefront_core::{
    DeleteOutcome, DetailView, Field, FormController, FormMode, FormPhase, ListController,
    ProductsApi, Route, View,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Cli, Command, Config};
use terminal::Terminal;
use transport::UreqTransport;

type Api = ProductsApi<UreqTransport>;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    info!(base_url = %config.base_url, timeout = ?config.timeout, "starting");
    let api = ProductsApi::new(config.client(), UreqTransport::new(config.timeout));

    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout().lock());

    let ok = match cli.command {
        Command::List => show(&api, &mut term, Route::List)?,
        Command::Show { id } => show(&api, &mut term, Route::Detail(id))?,
        Command::Open { path } => {
            let resolved = Route::resolve(&path);
            if resolved.redirected {
                info!(%path, "no view for path, redirecting to /");
            }
            show(&api, &mut term, resolved.route)?
        }
        Command::Delete { id, yes } => {
            let mut term = term.assume_yes(yes);
            let mut list = ListController::new();
            list.activate(&api);
            let outcome = if list.state().ready().is_some() {
                list.delete(&api, &mut term, id)
            } else {
                DeleteOutcome::Cancelled
            };
            render::list(term.output(), &list)?;
            list.state().error().is_none() && outcome != DeleteOutcome::Failed
        }
        Command::Create(args) => submit(&api, &mut term, FormMode::Create, args.changes())?,
        Command::Edit { id, fields } => submit(&api, &mut term, FormMode::Edit(id), fields.changes())?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Activate and render the view for `route`. Returns `false` if it failed.
fn show<R: BufRead, W: Write>(api: &Api, term: &mut Terminal<R, W>, route: Route) -> io::Result<bool> {
    let mut view = View::for_route(route);
    view.activate(api);
    let out = term.output();
    match &view {
        View::List(list) => {
            render::list(out, list)?;
            Ok(list.state().error().is_none())
        }
        View::Detail(detail) => {
            render::detail(out, detail)?;
            Ok(!matches!(detail.view(), DetailView::Failed(_) | DetailView::NotFound))
        }
        View::Form(form) => {
            render::form(out, form)?;
            Ok(form.error().is_none())
        }
    }
}

/// Fill a form with `changes`, submit it and follow the resulting navigation.
fn submit<R: BufRead, W: Write>(
    api: &Api,
    term: &mut Terminal<R, W>,
    mode: FormMode,
    changes: Vec<(Field, String)>,
) -> io::Result<bool> {
    let mut form = FormController::new(mode);
    form.activate(api);
    if form.error().is_some() || form.phase() != FormPhase::Idle {
        render::form(term.output(), &form)?;
        return Ok(false);
    }

    for (field, value) in changes {
        form.change(field, value);
    }

    if !form.submit(api, term) {
        render::form(term.output(), &form)?;
        return Ok(false);
    }
    match term.take_navigation() {
        Some(route) => show(api, term, route),
        None => Ok(true),
    }
}
