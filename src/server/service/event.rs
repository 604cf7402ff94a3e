use sea_orm::DatabaseConnection;

use crate::{
    model::event::{CreateEventDto, EventDto},
    server::{
        data::event::EventRepository,
        error::{event::EventError, Error},
        model::db::EventModel,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_events(&self) -> Result<Vec<EventDto>, Error> {
        let events = EventRepository::new(self.db).get_all().await?;

        Ok(events.into_iter().map(event_to_dto).collect())
    }

    pub async fn get_event(&self, event_id: i32) -> Result<EventDto, Error> {
        let event = EventRepository::new(self.db)
            .get(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        Ok(event_to_dto(event))
    }

    /// Validates and creates a new event
    ///
    /// # Returns
    /// - `Ok(EventDto)` - The created event
    /// - `Err(Error::EventError)` - Blank name, negative fee or invalid team size bounds
    /// - `Err(Error::DbErr)` - Database insert failed
    pub async fn create_event(&self, mut event: CreateEventDto) -> Result<EventDto, Error> {
        event.name = event.name.trim().to_string();

        if event.name.is_empty() {
            return Err(EventError::EmptyName.into());
        }
        if event.fee < 0 {
            return Err(EventError::NegativeFee(event.fee).into());
        }
        if event.min_team_size < 1 || event.max_team_size < event.min_team_size {
            return Err(EventError::InvalidTeamSize {
                min: event.min_team_size,
                max: event.max_team_size,
            }
            .into());
        }

        let event = EventRepository::new(self.db).create(event).await?;

        tracing::info!(event_id = %event.id, "Created event {}", event.name);

        Ok(event_to_dto(event))
    }
}

fn event_to_dto(event: EventModel) -> EventDto {
    EventDto {
        id: event.id,
        name: event.name,
        description: event.description,
        venue: event.venue,
        fee: event.fee,
        min_team_size: event.min_team_size,
        max_team_size: event.max_team_size,
    }
}
