//! Plain-text rendering of the catalog and cart views.

use std::fmt::Write;

use rocketshoes_cart::views::cart::CartView;
use rocketshoes_cart::views::product_list::ProductRow;

pub fn product_list(rows: &[ProductRow]) -> String {
    if rows.is_empty() {
        return "Nenhum produto disponível\n".to_string();
    }
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "[{:>3}] {:<40} {:>14}   no carrinho: {}",
            row.id, row.title, row.price_formatted, row.cart_amount
        );
    }
    out
}

pub fn cart(view: &CartView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Meu carrinho ({})", view.size_label);
    if view.is_empty() {
        let _ = writeln!(out, "  carrinho vazio");
    } else {
        let _ = writeln!(
            out,
            "  {:>3}  {:<40} {:>14} {:>5} {:>14}",
            "ID", "PRODUTO", "PREÇO", "QTD", "SUBTOTAL"
        );
        for row in &view.rows {
            let _ = writeln!(
                out,
                "  {:>3}  {:<40} {:>14} {:>5} {:>14}",
                row.id, row.title, row.price_formatted, row.amount, row.subtotal_formatted
            );
        }
    }
    let _ = writeln!(out, "TOTAL {}", view.total_formatted);
    out
}
