use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use common::api;

use crate::error::{ClientError, ClientResult};
use crate::transport::{HttpMethod, RawResponse, Transport};

pub type RecordedRequest = (HttpMethod, String, Option<String>);

/// Scripted stand-in for the machine service.
///
/// The status endpoint answers with whatever was last given to `set_status` (unreachable
/// until then); command endpoints pop queued replies and are unreachable once the queue
/// runs dry.
pub struct FakeMachine {
    status: RefCell<ClientResult<RawResponse>>,
    commands: RefCell<VecDeque<ClientResult<RawResponse>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl FakeMachine {
    pub fn new() -> Self {
        FakeMachine {
            status: RefCell::new(Err(connection_refused())),
            commands: RefCell::new(VecDeque::new()),
            requests: RefCell::new(Vec::new()),
        }
    }
    pub fn set_status(&self, body: &str) {
        *self.status.borrow_mut() = Ok(RawResponse { status: 200, body: body.to_string() });
    }
    pub fn set_status_response(&self, response: ClientResult<RawResponse>) {
        *self.status.borrow_mut() = response;
    }
    pub fn push_command(&self, response: RawResponse) {
        self.commands.borrow_mut().push_back(Ok(response));
    }
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
    pub fn status_requests(&self) -> usize {
        self.requests.borrow().iter().filter(|(_, path, _)| path == api::MACHINE_STATUS).count()
    }
}

fn connection_refused() -> ClientError {
    ClientError::Network("connection refused".to_string())
}

#[async_trait(?Send)]
impl Transport for FakeMachine {
    async fn request(&self, method: HttpMethod, path: &str, json_body: Option<String>) -> ClientResult<RawResponse> {
        self.requests.borrow_mut().push((method, path.to_string(), json_body));
        if path == api::MACHINE_STATUS {
            self.status.borrow().clone()
        } else {
            self.commands.borrow_mut().pop_front().unwrap_or_else(|| Err(connection_refused()))
        }
    }
}
