pub mod dto;

pub use dto::{LoginDto, PokemonDto, PokemonResponse, RegisterDto, ReviewDto};
