use crate::app::view;
use crate::core::panels::{Language, Panel};
use crate::core::storefront::{StoreEvent, Storefront};
use crate::domain::model::ProductId;
use crate::domain::ports::StoreSettings;
use crate::utils::error::{ErrorCategory, Result, StoreError};
use std::io::{BufRead, Write};

const USAGE: &str = "\
Commands:
  search [term]      filter products by name (no term clears the filter)
  add <id>           add one of product <id> to the cart
  remove <id>        remove product <id> from the cart entirely
  cart | close       open or close the cart drawer
  toggle <panel>     show/hide the profile, settings or help panel
  lang [name]        pick a display language (list them without a name)
  checkout           print the total and both checkout links
  show               redraw the storefront
  json               print the current state as JSON
  commands           this list
  quit | exit        leave the store";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Event(StoreEvent),
    Languages,
    Checkout,
    Show,
    Json,
    Usage,
    Quit,
}

fn invalid(input: &str, reason: impl Into<String>) -> StoreError {
    StoreError::InvalidCommand {
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn parse_id(input: &str, arg: Option<&str>) -> Result<ProductId> {
    let raw = arg.ok_or_else(|| invalid(input, "a product id is required"))?;
    raw.parse::<u32>()
        .map(ProductId)
        .map_err(|_| invalid(input, format!("'{}' is not a product id", raw)))
}

/// 解析一行輸入；空白行回傳 None
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>> {
    let input = line.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (input, ""),
    };
    let arg = if rest.is_empty() { None } else { Some(rest) };

    let command = match verb.to_lowercase().as_str() {
        "search" => ShellCommand::Event(StoreEvent::Search(rest.to_string())),
        "add" => ShellCommand::Event(StoreEvent::AddToCart(parse_id(input, arg)?)),
        "remove" => ShellCommand::Event(StoreEvent::RemoveFromCart(parse_id(input, arg)?)),
        "cart" => ShellCommand::Event(StoreEvent::OpenCart),
        "close" => ShellCommand::Event(StoreEvent::CloseCart),
        "toggle" => {
            let panel = arg
                .ok_or_else(|| invalid(input, "which panel? profile, settings or help"))?
                .parse::<Panel>()
                .map_err(|reason| invalid(input, reason))?;
            ShellCommand::Event(StoreEvent::TogglePanel(panel))
        }
        "lang" => match arg {
            None => ShellCommand::Languages,
            Some(name) => {
                let language = name
                    .parse::<Language>()
                    .map_err(|reason| invalid(input, reason))?;
                ShellCommand::Event(StoreEvent::SelectLanguage(language))
            }
        },
        "checkout" => ShellCommand::Checkout,
        "show" => ShellCommand::Show,
        "json" => ShellCommand::Json,
        "commands" | "?" => ShellCommand::Usage,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(invalid(input, format!("unknown command '{}'", other))),
    };

    Ok(Some(command))
}

pub fn print_checkout<S: StoreSettings, W: Write>(
    store: &Storefront<S>,
    out: &mut W,
) -> Result<()> {
    match store.checkout_links() {
        Some(links) => {
            writeln!(out, "Total: ${}", store.total())?;
            writeln!(out, "Pay with PayPal: {}", links.payment)?;
            writeln!(out, "Pay via Mobile Money (WhatsApp): {}", links.messaging)?;
        }
        None => writeln!(out, "Your cart is empty.")?,
    }
    Ok(())
}

pub fn print_json<S: StoreSettings, W: Write>(store: &Storefront<S>, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &store.snapshot())?;
    writeln!(out)?;
    Ok(())
}

/// 互動式工作階段：一行一個指令，改變狀態後重畫
///
/// 輸入錯誤只提示，不結束迴圈；I/O 錯誤才往外傳。
pub fn run_shell<S, R, W>(store: &mut Storefront<S>, input: R, out: &mut W) -> Result<()>
where
    S: StoreSettings,
    R: BufRead,
    W: Write,
{
    view::render(store, out)?;
    writeln!(out, "Type 'commands' for help.")?;

    for raw in input.split(b'\n') {
        let raw = raw?;

        // 非 UTF-8 的行當成輸入錯誤，不中斷工作階段
        let (line, parsed) = match String::from_utf8(raw) {
            Ok(line) => {
                let parsed = parse_command(&line);
                (line, parsed)
            }
            Err(e) => {
                let line = String::from_utf8_lossy(e.as_bytes()).into_owned();
                let err = invalid(line.trim(), "line is not valid UTF-8");
                (line, Err(err))
            }
        };

        let outcome = match parsed {
            Ok(None) => Ok(true),
            Ok(Some(ShellCommand::Quit)) => Ok(false),
            Ok(Some(command)) => execute(store, command, out).map(|_| true),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.category() == ErrorCategory::Input => {
                tracing::debug!("Rejected input '{}': {}", line.trim(), e);
                writeln!(out, "❌ {}", e.user_friendly_message())?;
                writeln!(out, "💡 {}", e.recovery_suggestion())?;
            }
            Err(e) => return Err(e),
        }
    }

    writeln!(out, "Goodbye from {}!", store.settings().store_name())?;
    out.flush()?;
    Ok(())
}

fn execute<S: StoreSettings, W: Write>(
    store: &mut Storefront<S>,
    command: ShellCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        ShellCommand::Event(event) => {
            store.apply(event)?;
            view::render(store, out)?;
        }
        ShellCommand::Languages => view::render_languages(store.language(), out)?,
        ShellCommand::Checkout => print_checkout(store, out)?,
        ShellCommand::Show => view::render(store, out)?,
        ShellCommand::Json => print_json(store, out)?,
        ShellCommand::Usage => writeln!(out, "{}", USAGE)?,
        ShellCommand::Quit => {}
    }
    Ok(())
}
