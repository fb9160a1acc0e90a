use crate::{error::Error, template::TemplateSet};
use hyper::Method;
use std::collections::HashMap;

/// One observed HTTP request together with the response it received.
/// The body is a snapshot taken at capture time; later activity on the
/// underlying connection cannot change it.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub response: Option<Response>,
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Request {
    pub fn new(method: Method, url: String, headers: HashMap<String, String>, body: String) -> Self {
        Request {
            method,
            url,
            headers,
            body,
            response: None,
        }
    }

    /// Sets the owned response. Attaching a second response replaces the
    /// first; the last value wins.
    pub fn attach_response(&mut self, response: Response) {
        self.response = Some(response);
    }

    /// Expands the fixed request template. The owned response renders
    /// through its own template; the action render invokes both.
    pub fn render(&self, templates: &TemplateSet) -> Result<String, Error> {
        templates.render_request(self)
    }
}

impl Response {
    pub fn new(status_code: u16, headers: HashMap<String, String>, body: String) -> Self {
        Response {
            status_code,
            headers,
            body,
        }
    }

    pub fn render(&self, templates: &TemplateSet) -> Result<String, Error> {
        templates.render_response(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_response_last_value_wins() {
        let mut request = Request::new(Method::GET, String::from("/"), HashMap::new(), String::new());

        request.attach_response(Response::new(500, HashMap::new(), String::new()));
        request.attach_response(Response::new(200, HashMap::new(), String::new()));

        assert_eq!(request.response.unwrap().status_code, 200);
    }

    #[test]
    fn request_renders_independently_of_its_response() {
        let templates = TemplateSet::new().unwrap();
        let mut request =
            Request::new(Method::DELETE, String::from("/widgets/1"), HashMap::new(), String::new());

        let without_response = request.render(&templates).unwrap();
        request.attach_response(Response::new(204, HashMap::new(), String::new()));
        let with_response = request.render(&templates).unwrap();

        assert_eq!(without_response, "+ Request DELETE /widgets/1");
        assert_eq!(without_response, with_response);
    }

    #[test]
    fn response_renders_its_own_block() {
        let templates = TemplateSet::new().unwrap();
        let response = Response::new(204, HashMap::new(), String::new());

        assert_eq!(response.render(&templates).unwrap(), "+ Response 204");
    }
}
