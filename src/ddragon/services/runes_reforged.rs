use serde::{Deserialize};

/// A rune path (Precision, Domination, ...). The document
/// is a bare json array of these.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct RunePathDto {
    pub id : i32,
    pub key : String,
    pub icon : String,   // relative to <cdn>/img/
    pub name : String,
    pub slots : Vec<RuneSlotDto>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct RuneSlotDto {
    pub runes : Vec<RuneDto>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct RuneDto {
    pub id : i32,
    pub key : String,
    pub icon : String,
    pub name : String,
}

impl RunePathDto {

    /// The runes of the first slot, which is where the keystones live.
    /// Empty if the path has no slots at all.
    pub fn keystones(&self) -> &[RuneDto] {
        self.slots.first().map(|slot| slot.runes.as_slice()).unwrap_or(&[])
    }
}
