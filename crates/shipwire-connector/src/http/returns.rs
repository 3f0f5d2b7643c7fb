/*
[INPUT]:  Return identifiers, query parameters and pagination
[OUTPUT]: Return authorizations, holds, items, trackings, labels and label jobs
[POS]:    HTTP layer - returns endpoint group
[UPDATE]: When adding returns endpoints or changing their routes
*/

use serde::Serialize;

use crate::http::route::{self, resource_route};
use crate::http::{ApiRequest, Connector, Pagination, Params, Result};
use crate::types::{
    Collection, Download, Envelope, LabelJob, ReturnHold, ReturnItem, ReturnLabel, ReturnOrder,
    ReturnTracking,
};

/// Bulk label generation only exists from this API revision on
pub const GENERATE_LABELS_VERSION: &str = "v3.1";

const INCLUDE_CLEARED: &str = "includeCleared";

/// Returns (RMA) endpoint group.
///
/// Stateless: every operation is one connector call, and connector errors
/// are passed through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Returns<'a> {
    connector: &'a Connector,
}

impl Connector {
    pub fn returns(&self) -> Returns<'_> {
        Returns { connector: self }
    }
}

impl Returns<'_> {
    /// List returns matching `params`
    ///
    /// GET /api/v3/returns
    pub async fn listing(
        &self,
        params: Params,
        pagination: Pagination,
    ) -> Result<Collection<ReturnOrder>> {
        self.collection(route::RETURNS, None, params, pagination)
            .await
    }

    /// Get a single return, optionally with every sub-resource expanded
    ///
    /// GET /api/v3/returns/{id}?expand=all
    pub async fn details(&self, return_id: &str, expand: bool) -> Result<ReturnOrder> {
        let mut request = ApiRequest::get(resource_route(route::RETURN, Some(return_id)));
        if expand {
            request = request.with_param("expand", "all");
        }
        self.connector.request_resource(request).await
    }

    /// Cancel a return; true only when Shipwire answers with status 200
    ///
    /// POST /api/v3/returns/{id}/cancel
    pub async fn cancel(&self, return_id: &str) -> Result<bool> {
        let request =
            ApiRequest::post(resource_route(route::RETURN_CANCEL, Some(return_id))).return_on_error();
        let envelope: Envelope = self.connector.request(request).await?;
        Ok(envelope.status == 200)
    }

    /// Holds placed on a return. `include_cleared` is ignored when `params`
    /// already carries `includeCleared`.
    ///
    /// GET /api/v3/returns/{id}/holds
    pub async fn holds(
        &self,
        return_id: &str,
        include_cleared: bool,
        mut params: Params,
        pagination: Pagination,
    ) -> Result<Collection<ReturnHold>> {
        params
            .entry(INCLUDE_CLEARED.to_string())
            .or_insert_with(|| u8::from(include_cleared).to_string());
        self.collection(route::RETURN_HOLDS, Some(return_id), params, pagination)
            .await
    }

    /// GET /api/v3/returns/{id}/items
    pub async fn items(
        &self,
        return_id: &str,
        params: Params,
        pagination: Pagination,
    ) -> Result<Collection<ReturnItem>> {
        self.collection(route::RETURN_ITEMS, Some(return_id), params, pagination)
            .await
    }

    /// GET /api/v3/returns/{id}/trackings
    pub async fn tracking(
        &self,
        return_id: &str,
        params: Params,
        pagination: Pagination,
    ) -> Result<Collection<ReturnTracking>> {
        self.collection(route::RETURN_TRACKINGS, Some(return_id), params, pagination)
            .await
    }

    /// GET /api/v3/returns/{id}/labels
    pub async fn labels(
        &self,
        return_id: &str,
        params: Params,
        pagination: Pagination,
    ) -> Result<Collection<ReturnLabel>> {
        self.collection(route::RETURN_LABELS, Some(return_id), params, pagination)
            .await
    }

    /// Label document for a return
    ///
    /// GET /api/v3/returns/{id}/labels (Accept: application/pdf)
    pub async fn labels_pdf(&self, return_id: &str) -> Result<Download> {
        self.connector
            .download(&resource_route(route::RETURN_LABELS, Some(return_id)))
            .await
    }

    /// Queue one combined label PDF for several returns
    ///
    /// POST /api/v3.1/returns/generateLabels
    pub async fn generate_labels<I: AsRef<str>>(
        &self,
        return_ids: &[I],
        params: Params,
    ) -> Result<LabelJob> {
        let ids: Vec<&str> = return_ids.iter().map(AsRef::as_ref).collect();
        let request = ApiRequest::post(route::RETURN_GENERATE_LABELS)
            .with_params(params)
            .with_json(&ids)?
            .with_version(GENERATE_LABELS_VERSION);
        self.connector.request_resource(request).await
    }

    /// Create a return
    ///
    /// POST /api/v3/returns
    pub async fn create<T: Serialize + ?Sized>(
        &self,
        return_data: &T,
        params: Params,
    ) -> Result<ReturnOrder> {
        let request = ApiRequest::post(route::RETURNS)
            .with_params(params)
            .with_json(return_data)?;
        self.connector.request_resource(request).await
    }

    async fn collection<T: serde::de::DeserializeOwned>(
        &self,
        template: &str,
        return_id: Option<&str>,
        params: Params,
        pagination: Pagination,
    ) -> Result<Collection<T>> {
        let request = ApiRequest::get(resource_route(template, return_id))
            .with_params(params)
            .with_pagination(pagination);
        self.connector.request_resource(request).await
    }
}
