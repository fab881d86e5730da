use super::claims::Identity;
use super::error::AuthError;
use super::verifier::TokenVerifier;
use async_trait::async_trait;
use rpc::sso::v1::{VerifyRequest, auth_client::AuthClient};
use std::time::Duration;
use tonic::Code;
use tonic::transport::{Channel, Endpoint};

/// Delegates token verification to the `sso.v1.Auth` service over gRPC.
#[derive(Clone)]
pub struct RemoteTokenVerifier {
    client: AuthClient<Channel>,
}

impl RemoteTokenVerifier {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: AuthClient::new(channel),
        }
    }

    /// Build a verifier whose channel connects on first use.
    pub fn connect_lazy(address: impl Into<String>) -> eyre::Result<Self> {
        let endpoint = Endpoint::from_shared(address.into())?
            .http2_keep_alive_interval(Duration::from_secs(30))
            .keep_alive_timeout(Duration::from_secs(10))
            .keep_alive_while_idle(true)
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10))
            .tcp_nodelay(true)
            .tcp_keepalive(Some(Duration::from_secs(30)));

        Ok(Self::new(endpoint.connect_lazy()))
    }
}

#[async_trait]
impl TokenVerifier for RemoteTokenVerifier {
    async fn verify(&self, access_token: &str) -> Result<Identity, AuthError> {
        let mut client = self.client.clone();
        let request = VerifyRequest {
            access_token: access_token.to_string(),
        };

        match client.verify(request).await {
            Ok(response) => {
                let body = response.into_inner();
                Ok(Identity {
                    id: body.id,
                    login: body.login,
                    is_admin: body.is_admin,
                })
            }
            Err(status) => match status.code() {
                Code::Unauthenticated
                | Code::InvalidArgument
                | Code::PermissionDenied
                | Code::NotFound => {
                    tracing::debug!(code = ?status.code(), "Remote verifier rejected token");
                    Err(AuthError::InvalidToken)
                }
                code => Err(AuthError::Unavailable(format!(
                    "sso.v1.Auth/Verify failed with {code:?}: {}",
                    status.message()
                ))),
            },
        }
    }
}
