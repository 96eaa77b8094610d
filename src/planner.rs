//! Itinerary planning against the Digitransit routing GraphQL API

use reqwest::{Client, header::CONTENT_TYPE};
use tracing::{debug, instrument};

use crate::{
    SUBSCRIPTION_KEY_HEADER,
    config::DigitransitConfig,
    error::{Error, Result},
    http,
    place::Place,
};

pub mod model;
pub mod query;

use model::Plan;

const API: &str = "routing";

#[derive(Debug, Clone)]
pub struct PlannerClient {
    client: Client,
    config: DigitransitConfig,
}

impl PlannerClient {
    pub fn new(config: &DigitransitConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(API)?,
            config: config.clone(),
        })
    }

    /// Up to `count` itineraries from `from` to `to`, in the order the router ranks them
    #[instrument(skip(self, from, to), fields(from = %from.label(), to = %to.label()))]
    pub async fn plan_route(&self, from: &Place, to: &Place, count: u32) -> Result<Plan> {
        let query = query::plan_query(from, to, count);

        let response = self
            .client
            .post(&self.config.routing_url)
            .header(CONTENT_TYPE, "application/graphql")
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .body(query)
            .send()
            .await
            .map_err(|source| Error::Transport { api: API, source })?;

        let body = http::success_body(API, response).await?;
        let plan = model::parse_plan(&body)?;

        debug!(itineraries = plan.itineraries.len(), "planned");
        Ok(plan)
    }
}
