//! Survey response submission.
//!
//! Responses go to a webhook as a JSON `POST`. Delivery is best effort: the
//! request runs on a detached task and its outcome is only logged.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Body posted to the feedback endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub score: u8,
    pub feedback: String,
    /// Estimation method the survey was shown for
    pub reference: String,
}

/// Fire-and-forget sink for survey responses.
pub trait FeedbackSubmitter: Send + Sync {
    fn submit(&self, response: SurveyResponse);
}

/// Posts responses to a webhook with reqwest.
#[derive(Clone, Debug)]
pub struct HttpFeedbackSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFeedbackSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one response and waits for the status line.
    pub async fn post(&self, response: &SurveyResponse) -> Result<()> {
        self.client
            .post(&self.endpoint)
            .json(response)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl FeedbackSubmitter for HttpFeedbackSubmitter {
    fn submit(&self, response: SurveyResponse) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No async runtime, dropping survey response");
            return;
        };
        let submitter = self.clone();
        handle.spawn(async move {
            if let Err(e) = submitter.post(&response).await {
                tracing::debug!(error = %e, "Survey response not delivered");
            }
        });
    }
}
