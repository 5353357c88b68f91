/// Which slice of the issued cards the list shows: everything, only cards a
/// recipient has activated, or only unclaimed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimFilter {
    #[default]
    All,
    Claimed,
    Unclaimed,
}

impl ClaimFilter {
    /// Decodes the `filter` navigation parameter. `"claimed"` is matched
    /// exactly; any other present value other than `"all"` reads as
    /// unclaimed.
    pub fn from_query_param(param: Option<&str>) -> Self {
        match param {
            None | Some("all") => Self::All,
            Some("claimed") => Self::Claimed,
            Some(_) => Self::Unclaimed,
        }
    }

    pub fn from_is_confirmed(value: Option<bool>) -> Self {
        match value {
            None => Self::All,
            Some(true) => Self::Claimed,
            Some(false) => Self::Unclaimed,
        }
    }

    /// The `isConfirmed` request variable this filter stands for.
    pub fn is_confirmed(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Claimed => Some(true),
            Self::Unclaimed => Some(false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Claimed => "claimed",
            Self::Unclaimed => "unclaimed",
        }
    }
}

impl std::fmt::Display for ClaimFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
