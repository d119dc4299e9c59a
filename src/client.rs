use crate::{
    config::Project,
    constants::PROJECT_KEY_HEADER,
    error::ClientError,
    model::{RemoteParameter, Struct},
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION},
    Client, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Arke backends wrap every payload in a `content` field
#[derive(Deserialize)]
struct Envelope<T> {
    content: T,
}

/// Entry of the arke listing; only the id is needed to fetch its struct
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ArkeSummary {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Tokens returned by a successful sign-in
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTokens {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

pub struct ArkeClient {
    pub base_url: String,
    pub client: Client,
}

impl ArkeClient {
    pub fn new(project: &Project) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(PROJECT_KEY_HEADER),
            HeaderValue::from_str(&project.key)?,
        );
        if project.has_session() {
            let hv = HeaderValue::from_str(&format!("Bearer {}", project.access_token))?;
            headers.insert(AUTHORIZATION, hv);
        }

        let client = Client::builder().default_headers(headers).build()?;
        Ok(ArkeClient {
            base_url: project.resolved_backend_url(),
            client,
        })
    }

    /// List every arke defined in the project
    pub async fn list_arkes(&self) -> Result<Vec<ArkeSummary>, ClientError> {
        #[derive(Deserialize)]
        struct ArkeList {
            #[serde(default)]
            items: Vec<ArkeSummary>,
        }

        let url = format!("{}/lib/arke/unit", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let list: ArkeList = read_content(resp).await?;
        Ok(list.items)
    }

    /// Fetch the struct describing the parameters of one arke
    pub async fn fetch_struct(&self, arke_id: &str) -> Result<Struct, ClientError> {
        #[derive(Deserialize)]
        struct StructContent {
            #[serde(default)]
            parameters: Vec<RemoteParameter>,
        }

        let url = format!("{}/lib/arke/{}/struct", self.base_url, arke_id);
        let resp = self.client.get(&url).send().await?;
        let content: StructContent = read_content(resp).await?;
        tracing::debug!(
            arke = arke_id,
            parameters = content.parameters.len(),
            "fetched struct"
        );
        Ok(Struct::new(arke_id, content.parameters))
    }

    /// Exchange credentials for a new pair of session tokens
    pub async fn sign_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionTokens, ClientError> {
        #[derive(Serialize)]
        struct SignIn<'a> {
            username: &'a str,
            password: &'a str,
        }

        let url = format!("{}/lib/auth/signin", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&SignIn { username, password })
            .send()
            .await?;
        read_content(resp).await
    }
}

async fn read_content<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    match resp.status() {
        StatusCode::UNAUTHORIZED => return Err(ClientError::Unauthorized),
        StatusCode::FORBIDDEN => return Err(ClientError::Forbidden),
        status if !status.is_success() => {
            let url = resp.url().to_string();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status { url, status, body });
        }
        _ => {}
    }
    let envelope: Envelope<T> = resp.json().await?;
    Ok(envelope.content)
}
