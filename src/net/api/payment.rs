use std::fmt::Display;

use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::request::{ApiCall, ApiResponse};
use crate::net::transport::Transport;
use crate::net::types::PaymentOrder;

/// `/payment/*` endpoints.
pub struct PaymentApi<'a, T> {
    gateway: &'a Gateway<T>,
}

impl<'a, T: Transport> PaymentApi<'a, T> {
    pub(crate) fn new(gateway: &'a Gateway<T>) -> Self {
        Self { gateway }
    }

    /// `POST /payment/ecpay`. The success body is the provider's HTML
    /// checkout form, not JSON.
    pub async fn create_payment(&self, order: &PaymentOrder) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::post("/payment/ecpay").with_json(order)?;
        self.gateway.send(call).await
    }

    /// `GET /payment/status/{tradeNo}`
    pub async fn get_payment_status(
        &self,
        trade_no: impl Display,
    ) -> Result<ApiResponse, ApiError> {
        let call = ApiCall::get(format!("/payment/status/{trade_no}"));
        self.gateway.send(call).await
    }

    /// `GET /payment/history`
    pub async fn get_payment_history(&self) -> Result<ApiResponse, ApiError> {
        self.gateway.send(ApiCall::get("/payment/history")).await
    }
}
