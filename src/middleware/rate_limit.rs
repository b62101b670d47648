//! Fixed-window request limiter for the API router. Generation calls hold a
//! worker for seconds at a time, so the window keeps a burst of clients from
//! pinning every task on LLM round-trips.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

#[derive(Clone, Debug)]
pub struct RequestBudget {
    per_second: u32,
    window: Arc<Mutex<Window>>,
}

#[derive(Debug)]
struct Window {
    opened: Instant,
    used: u32,
}

impl RequestBudget {
    pub fn new(per_second: u32) -> Self {
        Self {
            per_second: per_second.max(1),
            window: Arc::new(Mutex::new(Window {
                opened: Instant::now(),
                used: 0,
            })),
        }
    }

    fn try_acquire(&self) -> bool {
        let mut window = self.window.lock().expect("request budget mutex poisoned");
        if window.opened.elapsed() >= Duration::from_secs(1) {
            window.opened = Instant::now();
            window.used = 0;
        }
        if window.used < self.per_second {
            window.used += 1;
            true
        } else {
            false
        }
    }
}

pub async fn limit_requests(
    State(budget): State<RequestBudget>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !budget.try_acquire() {
        return (StatusCode::TOO_MANY_REQUESTS, "rate_limit_exceeded").into_response();
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_exhausts_within_one_window() {
        let budget = RequestBudget::new(2);
        assert!(budget.try_acquire());
        assert!(budget.try_acquire());
        assert!(!budget.try_acquire());
    }
}
