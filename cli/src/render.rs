//! Plain-text rendering of each view's state.

use std::io::{self, Write};

use storefront_core::{
    DetailController, DetailView, Field, FormController, FormPhase, ListController, RemoteState,
};

pub fn list<W: Write>(out: &mut W, list: &ListController) -> io::Result<()> {
    match list.state() {
        RemoteState::NotStarted | RemoteState::Loading => writeln!(out, "Loading..."),
        RemoteState::Failed(message) => writeln!(out, "error: {message}"),
        RemoteState::Ready(products) => {
            writeln!(out, "Products ({})", products.len())?;
            for p in products {
                writeln!(out, "{:>4}  {:<40}  ${:<10}  {}", p.id, p.title, p.price, p.category)?;
            }
            Ok(())
        }
    }
}

pub fn detail<W: Write>(out: &mut W, detail: &DetailController) -> io::Result<()> {
    match detail.view() {
        DetailView::NotStarted | DetailView::Loading => writeln!(out, "Loading..."),
        DetailView::Failed(message) => writeln!(out, "error: {message}"),
        DetailView::NotFound => writeln!(out, "Product not found"),
        DetailView::Ready(p) => {
            writeln!(out, "#{} {}", p.id, p.title)?;
            writeln!(out, "category: {}", p.category)?;
            writeln!(out, "price:    ${}", p.price)?;
            if let Some(rating) = &p.rating {
                writeln!(out, "rating:   {} ({} reviews)", rating.rate, rating.count)?;
            }
            writeln!(out, "image:    {}", p.image)?;
            writeln!(out)?;
            writeln!(out, "{}", p.description)
        }
    }
}

pub fn form<W: Write>(out: &mut W, form: &FormController) -> io::Result<()> {
    match form.phase() {
        FormPhase::Fetching => return writeln!(out, "Loading..."),
        FormPhase::Submitting => return writeln!(out, "Saving..."),
        FormPhase::Idle => {}
    }
    let heading = if form.is_edit() {
        "Edit Product"
    } else {
        "Create New Product"
    };
    writeln!(out, "{heading}")?;
    if let Some(error) = form.error() {
        writeln!(out, "error: {error}")?;
    }
    for field in Field::ALL {
        writeln!(out, "{:<12} {}", format!("{field}:"), form.field(field))?;
    }
    Ok(())
}
