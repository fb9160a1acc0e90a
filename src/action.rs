use crate::{
    data::{Request, Response},
    error::Error,
    metadata::MetadataResolver,
    template::TemplateSet,
    util,
};
use hyper::Method;
use serde::Deserialize;
use serde_json::value::RawValue;

/// One documented endpoint or RPC method, aggregating every exchange
/// observed for it. Requests are owned exclusively by the action; ordering
/// is decided at render time, not at insertion.
#[derive(Debug)]
pub struct Action {
    pub title: String,
    pub description: String,
    pub method: Method,
    pub requests: Vec<Request>,
}

/// Transient decode target for the JSON-RPC envelope; only the method name
/// outlives construction.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[serde(rename = "jsonrpc")]
    json_rpc: String,
    id: u32,
    method: String,
    #[allow(dead_code)]
    params: Box<RawValue>,
}

impl Action {
    /// Builds an action for a plain HTTP handler. The title comes from the
    /// resolver, falling back to the capitalized method word; the
    /// description is taken from the resolver as-is.
    pub fn new(method: Method, handler_name: &str, resolver: &dyn MetadataResolver) -> Self {
        let mut title = resolver.title(handler_name);
        if title.is_empty() {
            title = util::capitalize(method.as_str());
        }
        let description = resolver.description(handler_name);

        Action {
            title,
            description,
            method,
            requests: Vec::new(),
        }
    }

    /// Builds an action from a JSON-RPC call body. The envelope must carry
    /// `jsonrpc`, `id`, `method` and `params`; unknown fields are ignored.
    pub fn from_jsonrpc(http_method: Method, body: &[u8]) -> Result<Self, Error> {
        let envelope: JsonRpcRequest =
            serde_json::from_slice(body).map_err(Error::InvalidJsonRpc)?;

        tracing::debug!(
            id = envelope.id,
            version = %envelope.json_rpc,
            method = %envelope.method,
            "decoded JSON-RPC envelope"
        );

        Ok(Action {
            title: envelope.method,
            description: String::new(),
            method: http_method,
            requests: Vec::new(),
        })
    }

    /// Attaches `response` to `request` and appends the pair.
    pub fn add_request(&mut self, mut request: Request, response: Response) {
        request.attach_response(response);
        self.requests.push(request);
    }

    /// Regroups the requests by response status code and expands the action
    /// template. The 200 group leads; the remaining groups follow in
    /// first-seen order, each keeping its members' insertion order. The
    /// regrouped sequence is stored back, so a second render without new
    /// requests produces identical output.
    ///
    /// Every request must have a response attached; otherwise the render is
    /// rejected and the action is left untouched.
    pub fn render(&mut self, templates: &TemplateSet) -> Result<String, Error> {
        if self.requests.iter().any(|request| request.response.is_none()) {
            return Err(Error::MissingResponse);
        }

        let mut groups: Vec<(u16, Vec<Request>)> = Vec::new();
        for request in self.requests.drain(..) {
            let status_code = request
                .response
                .as_ref()
                .map_or(0, |response| response.status_code);
            match groups.iter_mut().find(|(code, _)| *code == status_code) {
                Some((_, members)) => members.push(request),
                None => groups.push((status_code, vec![request])),
            }
        }

        if let Some(position) = groups.iter().position(|(code, _)| *code == 200) {
            let ok_group = groups.remove(position);
            groups.insert(0, ok_group);
        }

        for (_, members) in groups {
            self.requests.extend(members);
        }

        templates.render_action(self)
    }
}
