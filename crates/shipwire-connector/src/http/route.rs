/*
[INPUT]:  Route templates and resource identifiers
[OUTPUT]: Resource paths relative to /api/{version}/
[POS]:    HTTP layer - route templating
[UPDATE]: When adding routes or placeholder kinds
*/

pub const RETURNS: &str = "returns";
pub const RETURN: &str = "returns/{id}";
pub const RETURN_CANCEL: &str = "returns/{id}/cancel";
pub const RETURN_HOLDS: &str = "returns/{id}/holds";
pub const RETURN_ITEMS: &str = "returns/{id}/items";
pub const RETURN_TRACKINGS: &str = "returns/{id}/trackings";
pub const RETURN_LABELS: &str = "returns/{id}/labels";
pub const RETURN_GENERATE_LABELS: &str = "returns/generateLabels";

/// Substitute every `{name}` placeholder with its value.
///
/// Placeholders without a value are left in place.
pub fn render_route(template: &str, placeholders: &[(&str, &str)]) -> String {
    placeholders
        .iter()
        .fold(template.to_string(), |route, (name, value)| {
            route.replace(&format!("{{{name}}}"), value)
        })
}

/// Resolve `{id}` in a single-resource template; collection routes pass `None`.
pub fn resource_route(template: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => render_route(template, &[("id", id)]),
        None => template.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_route_substitutes_id() {
        assert_eq!(
            resource_route(RETURN_HOLDS, Some("R123")),
            "returns/R123/holds"
        );
        assert_eq!(resource_route(RETURN, Some("42")), "returns/42");
    }

    #[test]
    fn test_resource_route_without_id_is_verbatim() {
        assert_eq!(resource_route(RETURN_HOLDS, None), "returns/{id}/holds");
        assert_eq!(resource_route(RETURNS, None), "returns");
    }

    #[test]
    fn test_render_route_named_placeholders() {
        let route = render_route(
            "orders/{orderId}/returns/{id}",
            &[("orderId", "O-1"), ("id", "R-2")],
        );
        assert_eq!(route, "orders/O-1/returns/R-2");
    }

    #[test]
    fn test_render_route_leaves_unknown_placeholders() {
        assert_eq!(
            render_route("returns/{id}/{sub}", &[("id", "7")]),
            "returns/7/{sub}"
        );
    }
}
