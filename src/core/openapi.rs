use utoipa::{Modify, OpenApi};

use crate::features::tickets::{dtos as tickets_dtos, handlers as tickets_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        tickets_handlers::get_current_count,
        tickets_handlers::get_next_ticket,
        tickets_handlers::reset_ticket_counter,
        tickets_handlers::list_counter_history,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Tickets
            tickets_dtos::CurrentCountResponseDto,
            tickets_dtos::NextTicketResponseDto,
            tickets_dtos::ResetCounterResponseDto,
            tickets_dtos::TicketCounterDto,
            ApiResponse<Vec<tickets_dtos::TicketCounterDto>>,
        )
    ),
    tags(
        (name = "tickets", description = "Ticket numbering per business location"),
    ),
    info(
        title = "Ganaderia Tickets API",
        version = "0.1.0",
        description = "Per-location ticket numbering for livestock transactions",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
