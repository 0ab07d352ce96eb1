use std::sync::Arc;

use tracing::info;

use super::{require_text, ServiceError};
use crate::api::dto::{PokemonDto, PokemonResponse};
use crate::config::ApiConfig;
use crate::database::repositories::PokemonRepository;

pub struct PokemonService {
    pokemon: Arc<dyn PokemonRepository>,
    default_page_size: u32,
    max_page_size: u32,
}

impl PokemonService {
    pub fn new(pokemon: Arc<dyn PokemonRepository>, api: &ApiConfig) -> Self {
        Self {
            pokemon,
            default_page_size: api.default_page_size.max(1),
            max_page_size: api.max_page_size.max(1),
        }
    }

    pub async fn create_pokemon(&self, dto: PokemonDto) -> Result<PokemonDto, ServiceError> {
        validate(&dto)?;
        let saved = self.pokemon.save(dto.into()).await?;
        info!("Created pokemon {} ({})", saved.name, saved.id);
        Ok(saved.into())
    }

    /// Zero-based paging; the page size is clamped to the configured maximum
    pub async fn get_all_pokemon(
        &self,
        page_no: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<PokemonResponse, ServiceError> {
        let page_no = page_no.unwrap_or(0);
        let page_size = page_size
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size);

        let offset = i64::from(page_no) * i64::from(page_size);
        let rows = self.pokemon.find_page(i64::from(page_size), offset).await?;
        let total_elements = self.pokemon.count().await?;

        let total_pages = (total_elements as u64).div_ceil(u64::from(page_size)) as u32;

        Ok(PokemonResponse {
            content: rows.into_iter().map(PokemonDto::from).collect(),
            page_no,
            page_size,
            total_elements,
            total_pages,
            last: page_no.saturating_add(1) >= total_pages,
        })
    }

    pub async fn get_pokemon_by_id(&self, id: i64) -> Result<PokemonDto, ServiceError> {
        self.pokemon
            .find_by_id(id)
            .await?
            .map(PokemonDto::from)
            .ok_or(ServiceError::PokemonNotFound(id))
    }

    pub async fn get_pokemon_by_type(&self, pokemon_type: &str) -> Result<PokemonDto, ServiceError> {
        self.pokemon
            .find_by_type(pokemon_type)
            .await?
            .map(PokemonDto::from)
            .ok_or_else(|| ServiceError::PokemonTypeNotFound(pokemon_type.to_string()))
    }

    pub async fn update_pokemon(&self, dto: PokemonDto, id: i64) -> Result<PokemonDto, ServiceError> {
        validate(&dto)?;
        let updated = self
            .pokemon
            .update(id, dto.into())
            .await?
            .ok_or(ServiceError::PokemonNotFound(id))?;
        info!("Updated pokemon {}", id);
        Ok(updated.into())
    }

    /// Succeeds whether or not the pokemon existed
    pub async fn delete_pokemon_id(&self, id: i64) -> Result<(), ServiceError> {
        self.pokemon.delete_by_id(id).await?;
        info!("Deleted pokemon {}", id);
        Ok(())
    }
}

fn validate(dto: &PokemonDto) -> Result<(), ServiceError> {
    require_text("name", &dto.name)?;
    require_text("type", &dto.pokemon_type)
}
