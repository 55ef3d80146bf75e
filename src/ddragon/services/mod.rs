pub mod champion;
pub mod item;
pub mod runes_reforged;
pub mod summoner;
