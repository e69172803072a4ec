//! HTTP client for the Google Sheets and Drive REST APIs.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::auth::{fetch_access_token, ServiceAccountKey};
use super::publish::{SheetBackend, SheetRow};
use super::SheetsError;

// ============================================================================
// Constants
// ============================================================================

const SHEETS_API_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";

const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Let Sheets parse values as if typed into the UI (numbers, dates, formulas)
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    updated_rows: Option<usize>,
}

/// Authenticated Sheets/Drive client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    token: String,
}

impl SheetsClient {
    /// Create a client with an already issued bearer token
    pub fn with_token(token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, token })
    }

    /// Authenticate as the service account
    pub async fn connect(key: &ServiceAccountKey) -> Result<Self> {
        let mut sheets = Self::with_token(String::new())?;
        sheets.token = fetch_access_token(&sheets.client, key)
            .await
            .context("Failed to authenticate service account")?;
        Ok(sheets)
    }

    /// Open a tab of a spreadsheet shared with the service account, by names
    pub async fn open_worksheet(&self, spreadsheet_name: &str, tab_name: &str) -> Result<Worksheet> {
        let spreadsheet_id = self.find_spreadsheet_id(spreadsheet_name).await?;

        let titles = self.sheet_titles(&spreadsheet_id).await?;
        if !titles.iter().any(|t| t == tab_name) {
            return Err(SheetsError::WorksheetNotFound {
                spreadsheet: spreadsheet_name.to_string(),
                tab: tab_name.to_string(),
            }
            .into());
        }

        info!(spreadsheet = spreadsheet_name, tab = tab_name, "Opened worksheet");
        Ok(Worksheet {
            client: self.clone(),
            spreadsheet_id,
            title: tab_name.to_string(),
        })
    }

    async fn find_spreadsheet_id(&self, name: &str) -> Result<String> {
        let query = drive_name_query(name);
        let response = self
            .client
            .get(DRIVE_FILES_URL)
            .bearer_auth(&self.token)
            .query(&[
                ("q", query.as_str()),
                ("fields", "files(id,name)"),
                ("pageSize", "1"),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ])
            .send()
            .await
            .context("Failed to search Drive for spreadsheet")?;

        let response = Self::check_response(response).await?;
        let list: FileList = response
            .json()
            .await
            .context("Failed to parse Drive file list")?;

        let file = list
            .files
            .into_iter()
            .next()
            .ok_or_else(|| SheetsError::SpreadsheetNotFound(name.to_string()))?;
        debug!(id = %file.id, name = %file.name, "Spreadsheet found");
        Ok(file.id)
    }

    async fn sheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>> {
        let url = format!("{}/{}", SHEETS_API_BASE_URL, spreadsheet_id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("fields", "sheets.properties.title")])
            .send()
            .await
            .context("Failed to fetch spreadsheet metadata")?;

        let response = Self::check_response(response).await?;
        let meta: SpreadsheetMeta = response
            .json()
            .await
            .context("Failed to parse spreadsheet metadata")?;

        Ok(meta.sheets.into_iter().map(|s| s.properties.title).collect())
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(SheetsError::from_status(status, &body).into())
        }
    }
}

/// One tab of a spreadsheet.
pub struct Worksheet {
    client: SheetsClient,
    spreadsheet_id: String,
    title: String,
}

impl Worksheet {
    /// `.../spreadsheets/{id}/values/{range}:{action}`
    fn values_url(&self, action: &str) -> Result<Url> {
        let mut url = Url::parse(SHEETS_API_BASE_URL)?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Sheets API URL cannot have path segments"))?
            .push(&self.spreadsheet_id)
            .push("values")
            .push(&format!("{}:{}", a1_range(&self.title), action));
        Ok(url)
    }
}

impl SheetBackend for Worksheet {
    async fn clear(&self) -> Result<()> {
        let response = self
            .client
            .client
            .post(self.values_url("clear")?)
            .bearer_auth(&self.client.token)
            .json(&json!({}))
            .send()
            .await
            .context("Failed to send clear request")?;

        SheetsClient::check_response(response).await?;
        debug!(tab = %self.title, "Tab cleared");
        Ok(())
    }

    async fn append_rows(&self, rows: &[SheetRow]) -> Result<()> {
        let response = self
            .client
            .client
            .post(self.values_url("append")?)
            .bearer_auth(&self.client.token)
            .query(&[
                ("valueInputOption", VALUE_INPUT_OPTION),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({
                "majorDimension": "ROWS",
                "values": rows,
            }))
            .send()
            .await
            .context("Failed to send append request")?;

        let response = SheetsClient::check_response(response).await?;
        let appended: AppendResponse = response
            .json()
            .await
            .context("Failed to parse append response")?;

        let updated_rows = appended.updates.and_then(|u| u.updated_rows).unwrap_or(0);
        debug!(tab = %self.title, updated_rows, "Rows appended");
        Ok(())
    }
}

/// A1 notation for a whole tab, quoting the title
fn a1_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// Drive search query for a spreadsheet with exactly this name
fn drive_name_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        "name = '{}' and mimeType = '{}' and trashed = false",
        escaped, SPREADSHEET_MIME_TYPE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worksheet(title: &str) -> Worksheet {
        Worksheet {
            client: SheetsClient::with_token("token".to_string()).unwrap(),
            spreadsheet_id: "1AbC".to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_a1_range() {
        assert_eq!(a1_range("Callings"), "'Callings'");
        assert_eq!(a1_range("Bishop's List"), "'Bishop''s List'");
    }

    #[test]
    fn test_drive_name_query() {
        assert_eq!(
            drive_name_query("Ward Callings"),
            "name = 'Ward Callings' and mimeType = 'application/vnd.google-apps.spreadsheet' and trashed = false"
        );
        assert!(drive_name_query("Elders' Quorum").starts_with(r"name = 'Elders\' Quorum'"));
    }

    #[test]
    fn test_values_url() {
        let url = worksheet("Callings").values_url("append").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/1AbC/values/'Callings':append"
        );

        let url = worksheet("Ward Callings").values_url("clear").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/1AbC/values/'Ward%20Callings':clear"
        );
    }

    #[test]
    fn test_parse_append_response() {
        let json = r#"{"spreadsheetId":"1AbC","updates":{"updatedRange":"Callings!A1:G6","updatedRows":6}}"#;
        let parsed: AppendResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.updates.and_then(|u| u.updated_rows), Some(6));
    }

    #[test]
    fn test_parse_spreadsheet_meta() {
        let json = r#"{"sheets":[{"properties":{"title":"Callings"}},{"properties":{"title":"Archive"}}]}"#;
        let meta: SpreadsheetMeta = serde_json::from_str(json).unwrap();
        let titles: Vec<String> = meta.sheets.into_iter().map(|s| s.properties.title).collect();
        assert_eq!(titles, vec!["Callings", "Archive"]);
    }
}
