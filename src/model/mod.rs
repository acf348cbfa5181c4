pub mod player;
pub mod score;

pub use player::{first_name_slug, initials, is_placeholder_name, player_image_path};
pub use score::{
    normalize_separators, parse_round_number, parse_score, parse_score_lenient, MatchResult, Side,
};
