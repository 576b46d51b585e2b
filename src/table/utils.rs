/// Group key of a raw field: drop every `"` (not only the outer pair), then
/// trim surrounding whitespace.
pub fn clean_key(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}
