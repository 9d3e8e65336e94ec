use serde_json::Value;
use tracing::{info, warn};

use super::{parse_version, project};
use crate::config::ApiEndpoints;
use crate::error::AlignError;
use crate::model::item::{ItemType, ProjectedItem};
use crate::transport::{AuthScheme, Transport};

/// Platform page size. A shorter page is the last one.
pub const PAGE_SIZE: usize = 100;

pub struct ItemReader<'a> {
    transport: &'a dyn Transport,
    endpoints: &'a ApiEndpoints,
}

impl<'a> ItemReader<'a> {
    pub fn new(transport: &'a dyn Transport, endpoints: &'a ApiEndpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    fn page_url(&self, item_type: ItemType, program: Option<i64>, skip: usize) -> String {
        let base = format!("{}/{}", self.endpoints.api, item_type);
        match (program, skip) {
            (None, 0) => format!("{base}?expand=true"),
            // Later unfiltered pages have never carried expand.
            (None, skip) => format!("{base}?&$skip={skip}"),
            (Some(id), skip) => {
                let filter = format!(
                    "{}={}",
                    urlencoding::encode("$filter"),
                    urlencoding::encode(&format!("programId eq {id}"))
                );
                if skip == 0 {
                    format!("{base}?expand=true&{filter}")
                } else {
                    format!("{base}?expand=true&{filter}&$skip={skip}")
                }
            }
        }
    }

    /// Read items of one type, page by page, skipping recycled items and,
    /// when `program` is set, items linked to a different program.
    ///
    /// `max_count` is checked only between pages, so the result can overshoot
    /// it by up to one page.
    pub async fn read_all(
        &self,
        item_type: ItemType,
        max_count: usize,
        program: Option<i64>,
    ) -> Result<Vec<ProjectedItem>, AlignError> {
        info!("Collecting up to {max_count} items of type {item_type}...");
        let mut items = Vec::new();
        let mut skip = 0;

        loop {
            let url = self.page_url(item_type, program, skip);
            let page = self.fetch_page(&url).await?;

            for raw in &page {
                if !keep(raw, program) {
                    continue;
                }
                items.push(project(item_type, raw)?);
            }

            if page.len() < PAGE_SIZE || items.len() >= max_count {
                break;
            }
            skip += PAGE_SIZE;
        }

        info!("Loaded {} items of type {item_type}", items.len());
        Ok(items)
    }

    /// Read a single item by id. Recycled items are returned like any other.
    pub async fn read_one(
        &self,
        item_type: ItemType,
        id: i64,
    ) -> Result<Vec<ProjectedItem>, AlignError> {
        info!("Reading item of type {item_type} with ID={id}...");
        let url = format!("{}/{}/{}", self.endpoints.api, item_type, id);
        let resp = self.transport.get(&url, AuthScheme::Bearer).await?;
        let raw = resp.json(&url)?;
        let item = project(item_type, &raw).map_err(|e| match e {
            // An error payload from the platform is an object without an id.
            AlignError::MissingId { .. } | AlignError::NotAnObject { .. }
                if !resp.is_success() =>
            {
                AlignError::Status {
                    url: url.clone(),
                    status: resp.status,
                    body: resp.body.clone(),
                }
            }
            other => other,
        })?;
        info!("Loaded {item_type}/{id}");
        Ok(vec![item])
    }

    /// Fetch the About page and extract the platform version.
    pub async fn platform_version(&self) -> Result<Option<String>, AlignError> {
        let resp = self
            .transport
            .get(&self.endpoints.about, AuthScheme::Basic)
            .await?;
        if !resp.is_success() {
            return Err(AlignError::Status {
                url: self.endpoints.about.clone(),
                status: resp.status,
                body: resp.body,
            });
        }
        Ok(parse_version(&resp.body))
    }

    async fn fetch_page(&self, url: &str) -> Result<Vec<Value>, AlignError> {
        let resp = self.transport.get(url, AuthScheme::Bearer).await?;
        match resp.json(url)? {
            Value::Array(page) => Ok(page),
            _ if !resp.is_success() => Err(AlignError::Status {
                url: url.to_string(),
                status: resp.status,
                body: resp.body,
            }),
            _ => Err(AlignError::NotAnArray {
                url: url.to_string(),
            }),
        }
    }
}

fn keep(raw: &Value, program: Option<i64>) -> bool {
    if raw.get("isRecycled") == Some(&Value::Bool(true)) {
        return false;
    }

    let Some(program) = program else {
        return true;
    };

    let program_id = raw.get("programId");
    let primary_program_id = raw.get("primaryProgramId");
    if program_id.is_some() && primary_program_id.is_some() {
        warn!(
            id = %raw.get("id").unwrap_or(&serde_json::Value::Null),
            "item carries both programId and primaryProgramId"
        );
    }

    let matches = |field: Option<&Value>| field.map_or(true, |v| v.as_i64() == Some(program));
    matches(program_id) && matches(primary_program_id)
}
