use crate::{
    action::Action,
    data::{Request, Response},
    error::Error,
    util,
};
use std::collections::HashMap;
use tera::{Context, Tera};

// The output layout of these templates is a compatibility contract; the
// blank lines and the three-tab body prefix must survive any edit.
const ACTION_TEMPLATE: &str = "### {{ title }} [{{ method }}]\n\
{{ description }}{% for request in requests %}\n\
{{ request.request }}\n\
{{ request.response }}{% endfor %}";

const REQUEST_TEMPLATE: &str = "+ Request {{ method }} {{ url }}\
{% if headers %}\n\n    + Headers\n{% for header in headers %}\n\t\t\t{{ header }}{% endfor %}{% endif %}\
{% if body %}\n\n    + Body\n\n{{ body }}{% endif %}";

const RESPONSE_TEMPLATE: &str = "+ Response {{ status_code }}\
{% if headers %}\n\n    + Headers\n{% for header in headers %}\n\t\t\t{{ header }}{% endfor %}{% endif %}\
{% if body %}\n\n    + Body\n\n{{ body }}{% endif %}";

/// The fixed documentation templates, parsed once at construction. The set
/// is immutable afterwards; a parse failure here means the embedded
/// template text itself is broken and surfaces from [`TemplateSet::new`].
#[derive(Debug)]
pub struct TemplateSet {
    tera: Tera,
}

impl TemplateSet {
    pub fn new() -> Result<Self, Error> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        tera.add_raw_templates(vec![
            ("action", ACTION_TEMPLATE),
            ("request", REQUEST_TEMPLATE),
            ("response", RESPONSE_TEMPLATE),
        ])?;

        Ok(TemplateSet { tera })
    }

    pub(crate) fn render_action(&self, action: &Action) -> Result<String, Error> {
        let mut requests = Vec::with_capacity(action.requests.len());
        for request in &action.requests {
            let response = request.response.as_ref().ok_or(Error::MissingResponse)?;
            requests.push(serde_json::json!({
                "request": self.render_request(request)?,
                "response": self.render_response(response)?,
            }));
        }

        let mut context = Context::new();
        context.insert("title", &action.title);
        context.insert("method", action.method.as_str());
        context.insert("description", &action.description);
        context.insert("requests", &requests);

        Ok(self.tera.render("action", &context)?)
    }

    pub(crate) fn render_request(&self, request: &Request) -> Result<String, Error> {
        let mut context = Context::new();
        context.insert("method", request.method.as_str());
        context.insert("url", &request.url);
        context.insert("headers", &header_lines(&request.headers));
        context.insert("body", &fmt_body(&request.body));

        Ok(self.tera.render("request", &context)?)
    }

    pub(crate) fn render_response(&self, response: &Response) -> Result<String, Error> {
        let mut context = Context::new();
        context.insert("status_code", &response.status_code);
        context.insert("headers", &header_lines(&response.headers));
        context.insert("body", &fmt_body(&response.body));

        Ok(self.tera.render("response", &context)?)
    }
}

// Sorted so that rendered documents don't depend on map iteration order.
fn header_lines(headers: &HashMap<String, String>) -> Vec<String> {
    let mut lines = headers
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>();
    lines.sort();
    lines
}

// JSON bodies are indented; anything else falls back to the raw text under
// the same three-tab prefix.
fn fmt_body(body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }

    match util::indent_json(body) {
        Ok(indented) => format!("\t\t\t{}", indented),
        Err(_) => body
            .lines()
            .map(|line| format!("\t\t\t{}", line))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::Method;

    fn templates() -> TemplateSet {
        TemplateSet::new().unwrap()
    }

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (String::from(*k), String::from(*v)))
            .collect()
    }

    #[test]
    fn embedded_templates_parse() {
        assert!(TemplateSet::new().is_ok());
    }

    #[test]
    fn request_template_layout_is_fixed() {
        let request = Request::new(
            Method::POST,
            String::from("/widgets"),
            headers(&[("content-type", "application/json")]),
            String::from("{\"id\":1}"),
        );

        let rendered = templates().render_request(&request).unwrap();

        assert_eq!(
            rendered,
            "+ Request POST /widgets\n\n    + Headers\n\n\t\t\tcontent-type: application/json\n\n    + Body\n\n\t\t\t{\n\t\t\t\t\"id\": 1\n\t\t\t}"
        );
    }

    #[test]
    fn empty_sections_are_skipped() {
        let request = Request::new(Method::GET, String::from("/"), HashMap::new(), String::new());

        let rendered = templates().render_request(&request).unwrap();

        assert_eq!(rendered, "+ Request GET /");
    }

    #[test]
    fn response_template_includes_status_code() {
        let response = Response::new(404, HashMap::new(), String::from("missing"));

        let rendered = templates().render_response(&response).unwrap();

        assert_eq!(rendered, "+ Response 404\n\n    + Body\n\n\t\t\tmissing");
    }

    #[test]
    fn header_lines_are_sorted() {
        let lines = header_lines(&headers(&[("b", "2"), ("a", "1"), ("c", "3")]));

        assert_eq!(lines, vec!["a: 1", "b: 2", "c: 3"]);
    }

    #[test]
    fn non_json_bodies_keep_the_prefix_fallback() {
        assert_eq!(fmt_body("plain\ntext"), "\t\t\tplain\n\t\t\ttext");
    }
}
