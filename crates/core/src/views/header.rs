/// Badge text for the header: `"1 item"`, otherwise `"{n} itens"`.
/// Counts distinct line items, not units.
pub fn cart_size_label(count: usize) -> String {
    if count == 1 {
        format!("{count} item")
    } else {
        format!("{count} itens")
    }
}
