use nutype::nutype;

/// First name of the contact. The "required" rule is folded into the length
/// rule: an empty input fails as too short, exactly like any other input
/// below the minimum.
#[nutype(
    validate(len_char_min = FirstName::MIN_CHARS, len_char_max = FirstName::MAX_CHARS),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct FirstName(String);

impl FirstName {
    pub const MIN_CHARS: usize = 5;
    pub const MAX_CHARS: usize = 20;
}

#[nutype(
    validate(len_char_min = 1),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct LastName(String);

/// Free-form message, no constraints.
#[nutype(derive(Debug, Clone, PartialEq, Eq, Deref, From, Serialize, Deserialize))]
pub struct Message(String);
