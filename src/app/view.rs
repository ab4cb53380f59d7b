use crate::core::cart::format_amount;
use crate::core::panels::Language;
use crate::core::storefront::Storefront;
use crate::domain::model::Product;
use crate::domain::ports::StoreSettings;
use std::io::Write;

const RULE: &str = "────────────────────────────────────────";

/// 把整個店面畫成文字：頁首、面板、商品、購物車抽屜、頁尾
pub fn render<S: StoreSettings, W: Write>(
    store: &Storefront<S>,
    out: &mut W,
) -> std::io::Result<()> {
    render_header(store, out)?;
    render_panels(store, out)?;
    render_products(&store.visible_products(), out)?;
    if store.is_cart_open() {
        render_cart(store, out)?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "© 2025 {}. All rights reserved.",
        store.settings().store_name()
    )?;
    Ok(())
}

fn render_header<S: StoreSettings, W: Write>(
    store: &Storefront<S>,
    out: &mut W,
) -> std::io::Result<()> {
    let settings = store.settings();
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", settings.store_name())?;
    writeln!(out, "{}", settings.tagline())?;

    let search = if store.search().is_empty() {
        "(none)".to_string()
    } else {
        format!("\"{}\"", store.search())
    };
    writeln!(
        out,
        "Search: {} | Language: {} | Cart ({})",
        search,
        store.language(),
        store.cart().line_count()
    )?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

fn render_panels<S: StoreSettings, W: Write>(
    store: &Storefront<S>,
    out: &mut W,
) -> std::io::Result<()> {
    for panel in store.panels().open_panels() {
        writeln!(out, "[{}]", panel.text())?;
    }
    Ok(())
}

pub fn render_products<W: Write>(products: &[&Product], out: &mut W) -> std::io::Result<()> {
    if products.is_empty() {
        writeln!(out, "No products match your search.")?;
        return Ok(());
    }
    for product in products {
        writeln!(
            out,
            "#{:<3} {:<28} ${:>8}  {}",
            product.id.0,
            product.name,
            format_amount(product.price),
            product.image
        )?;
    }
    Ok(())
}

pub fn render_cart<S: StoreSettings, W: Write>(
    store: &Storefront<S>,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Your Cart")?;

    let cart = store.cart();
    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    for line in cart.lines() {
        writeln!(
            out,
            "  #{} {}  {} × ${}",
            line.product_id,
            line.name,
            line.quantity,
            format_amount(line.price)
        )?;
    }
    writeln!(out, "Total: ${}", store.total())?;

    if let Some(links) = store.checkout_links() {
        writeln!(out, "Pay with PayPal: {}", links.payment)?;
        writeln!(out, "Pay via Mobile Money (WhatsApp): {}", links.messaging)?;
    }
    Ok(())
}

pub fn render_languages<W: Write>(current: Language, out: &mut W) -> std::io::Result<()> {
    let options: Vec<String> = Language::ALL
        .iter()
        .map(|lang| {
            if *lang == current {
                format!("[{}]", lang)
            } else {
                lang.to_string()
            }
        })
        .collect();
    writeln!(out, "Languages: {}", options.join(" "))
}
