use serde::Serialize;

use crate::domain::repository::MailPort;
use crate::error::ResultsServiceError;

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Mail adapter over an HTTP relay (`POST {base}/messages`, bearer auth).
///
/// The relay owns SMTP; from here every failure — connect, auth, rejected
/// recipient — is one opaque `DeliveryFailed`.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    relay_url: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    pub fn new(relay_url: String, api_key: String, from: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url,
            api_key,
            from,
        }
    }
}

impl MailPort for HttpMailer {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ResultsServiceError> {
        let message = RelayMessage {
            from: &self.from,
            to: recipient,
            subject,
            body,
        };
        let response = self
            .client
            .post(format!("{}/messages", self.relay_url))
            .bearer_auth(&self.api_key)
            .json(&message)
            .send()
            .await
            .map_err(|e| ResultsServiceError::DeliveryFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ResultsServiceError::DeliveryFailed(format!(
                "relay returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
