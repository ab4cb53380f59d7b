use crate::app::{shell, view};
use crate::config::Command;
use crate::core::storefront::{StoreEvent, Storefront};
use crate::domain::model::ProductId;
use crate::domain::ports::StoreSettings;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// 執行一個 CLI 子指令；shell 才會讀 input
pub fn run_command<S, R, W>(
    store: &mut Storefront<S>,
    command: Command,
    json: bool,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: StoreSettings,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Shell => shell::run_shell(store, input, out)?,
        Command::List { search } => {
            store.apply(StoreEvent::Search(search))?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &store.visible_products())?;
                writeln!(out)?;
            } else {
                view::render_products(&store.visible_products(), out)?;
            }
        }
        Command::Checkout { items } => {
            for id in items {
                store.apply(StoreEvent::AddToCart(ProductId(id)))?;
            }
            store.apply(StoreEvent::OpenCart)?;
            if json {
                shell::print_json(store, out)?;
            } else {
                view::render_cart(store, out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
