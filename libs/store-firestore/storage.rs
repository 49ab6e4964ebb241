use tracing::trace;
use typed_builder::TypedBuilder;

use workdays_store_core::{PinFuture, Storage, StoreError, StoreResult, StoreServices, Workday};

use crate::codec;
use crate::config::FirestoreStorageConfig;
use crate::query::{QueryRequest, QueryResultRow};
use crate::transport::{PostRequest, Transport};

/// Persists workdays through the firestore REST api.
#[derive(TypedBuilder)]
pub struct FirestoreStorage {
    config: FirestoreStorageConfig,
    transport: Transport,
    services: StoreServices,
}

impl FirestoreStorage {
    fn create_document_url(&self) -> String {
        format!(
            "{}/{}?key={}",
            self.config.base_url,
            self.config.get_collection_id(),
            self.config.api_key
        )
    }

    fn run_query_url(&self) -> String {
        format!("{}:runQuery?key={}", self.config.base_url, self.config.api_key)
    }

    fn bearer_token(&self) -> StoreResult<String> {
        self.services
            .token_store
            .bearer_token()
            .ok_or(StoreError::Unauthorized)
    }
}

impl Storage for FirestoreStorage {
    fn save_workday(&self, workday: Workday) -> PinFuture<StoreResult<()>> {
        Box::pin(async move {
            trace!("save workday");
            let body = codec::encode_workday(&workday, &self.services.date_formatter);
            let request = PostRequest {
                url: self.create_document_url(),
                bearer_token: self.bearer_token()?,
                body: serde_json::to_value(&body).map_err(StoreError::operation_failed)?,
            };

            self.transport.post_json(request).await?;
            Ok(())
        })
    }

    fn get_workday_by_date(
        &self,
        display_date: String,
        user_id: String,
    ) -> PinFuture<StoreResult<Option<Workday>>> {
        Box::pin(async move {
            trace!("get workday by date");
            let query = QueryRequest::workday_by_date(
                &self.config.get_collection_id(),
                &display_date,
                &user_id,
            );
            let request = PostRequest {
                url: self.run_query_url(),
                bearer_token: self.bearer_token()?,
                body: serde_json::to_value(&query).map_err(StoreError::operation_failed)?,
            };

            let response = self.transport.post_json(request).await?;
            let rows: Vec<QueryResultRow> =
                serde_json::from_value(response).map_err(StoreError::corrupted_document)?;

            match rows.into_iter().next().and_then(|row| row.document) {
                Some(document) => Ok(Some(codec::decode_workday(
                    &document.name,
                    &document.fields,
                )?)),
                None => Ok(None),
            }
        })
    }
}
