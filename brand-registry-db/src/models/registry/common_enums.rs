use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Database model for producer lifecycle state enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "producer_state", rename_all = "PascalCase")]
pub enum ProducerState {
    Pending,
    Registered,
    Renewal,
    Transfer,
}

impl ProducerState {
    pub const ALL: [ProducerState; 4] = [
        ProducerState::Pending,
        ProducerState::Registered,
        ProducerState::Renewal,
        ProducerState::Transfer,
    ];
}

impl std::fmt::Display for ProducerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProducerState::Pending => write!(f, "Pending"),
            ProducerState::Registered => write!(f, "Registered"),
            ProducerState::Renewal => write!(f, "Renewal"),
            ProducerState::Transfer => write!(f, "Transfer"),
        }
    }
}

impl FromStr for ProducerState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ProducerState::Pending),
            "Registered" => Ok(ProducerState::Registered),
            "Renewal" => Ok(ProducerState::Renewal),
            "Transfer" => Ok(ProducerState::Transfer),
            _ => Err(()),
        }
    }
}

/// Database model for mark lifecycle state enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "mark_state", rename_all = "PascalCase")]
pub enum MarkState {
    InProcess,
    Active,
    Expired,
    Retired,
}

impl MarkState {
    pub const ALL: [MarkState; 4] = [
        MarkState::InProcess,
        MarkState::Active,
        MarkState::Expired,
        MarkState::Retired,
    ];
}

impl std::fmt::Display for MarkState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkState::InProcess => write!(f, "InProcess"),
            MarkState::Active => write!(f, "Active"),
            MarkState::Expired => write!(f, "Expired"),
            MarkState::Retired => write!(f, "Retired"),
        }
    }
}

impl FromStr for MarkState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InProcess" => Ok(MarkState::InProcess),
            "Active" => Ok(MarkState::Active),
            "Expired" => Ok(MarkState::Expired),
            "Retired" => Ok(MarkState::Retired),
            _ => Err(()),
        }
    }
}

/// Database model for mark trade type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "trade_type", rename_all = "PascalCase")]
pub enum TradeType {
    New,
    Renewal,
    Transfer,
}

impl TradeType {
    pub const ALL: [TradeType; 3] = [TradeType::New, TradeType::Renewal, TradeType::Transfer];
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeType::New => write!(f, "New"),
            TradeType::Renewal => write!(f, "Renewal"),
            TradeType::Transfer => write!(f, "Transfer"),
        }
    }
}

impl FromStr for TradeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(TradeType::New),
            "Renewal" => Ok(TradeType::Renewal),
            "Transfer" => Ok(TradeType::Transfer),
            _ => Err(()),
        }
    }
}

/// Database model for request trade type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_trade_type", rename_all = "PascalCase")]
pub enum RequestTradeType {
    New,
    Renewal,
    Transfer,
    Deregistration,
}

impl std::fmt::Display for RequestTradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestTradeType::New => write!(f, "New"),
            RequestTradeType::Renewal => write!(f, "Renewal"),
            RequestTradeType::Transfer => write!(f, "Transfer"),
            RequestTradeType::Deregistration => write!(f, "Deregistration"),
        }
    }
}

impl FromStr for RequestTradeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(RequestTradeType::New),
            "Renewal" => Ok(RequestTradeType::Renewal),
            "Transfer" => Ok(RequestTradeType::Transfer),
            "Deregistration" => Ok(RequestTradeType::Deregistration),
            _ => Err(()),
        }
    }
}

/// Database model for request workflow state enum
///
/// Pending is the only live state; Approved and Rejected are terminal and a
/// resolved request accepts no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_state", rename_all = "PascalCase")]
pub enum RequestState {
    Pending,
    Approved,
    Rejected,
}

impl RequestState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Approved | RequestState::Rejected)
    }

    /// Whether the workflow allows moving from `self` to `target`.
    pub fn can_transition_to(&self, target: RequestState) -> bool {
        matches!(self, RequestState::Pending) && target.is_terminal()
    }
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestState::Pending => write!(f, "Pending"),
            RequestState::Approved => write!(f, "Approved"),
            RequestState::Rejected => write!(f, "Rejected"),
        }
    }
}

impl FromStr for RequestState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(RequestState::Pending),
            "Approved" => Ok(RequestState::Approved),
            "Rejected" => Ok(RequestState::Rejected),
            _ => Err(()),
        }
    }
}

/// Database model for brand placement enum (where the brand is applied)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "brand_placement", rename_all = "PascalCase")]
pub enum BrandPlacement {
    Flank,
    Haunch,
    Rib,
    Shoulder,
    Neck,
    Cheek,
    Other,
}

impl std::fmt::Display for BrandPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandPlacement::Flank => write!(f, "Flank"),
            BrandPlacement::Haunch => write!(f, "Haunch"),
            BrandPlacement::Rib => write!(f, "Rib"),
            BrandPlacement::Shoulder => write!(f, "Shoulder"),
            BrandPlacement::Neck => write!(f, "Neck"),
            BrandPlacement::Cheek => write!(f, "Cheek"),
            BrandPlacement::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for BrandPlacement {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Flank" => Ok(BrandPlacement::Flank),
            "Haunch" => Ok(BrandPlacement::Haunch),
            "Rib" => Ok(BrandPlacement::Rib),
            "Shoulder" => Ok(BrandPlacement::Shoulder),
            "Neck" => Ok(BrandPlacement::Neck),
            "Cheek" => Ok(BrandPlacement::Cheek),
            "Other" => Ok(BrandPlacement::Other),
            _ => Err(()),
        }
    }
}

/// Database model for ear-mark side enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ear_side", rename_all = "PascalCase")]
pub enum EarSide {
    Right,
    Left,
    Both,
}

impl std::fmt::Display for EarSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EarSide::Right => write!(f, "Right"),
            EarSide::Left => write!(f, "Left"),
            EarSide::Both => write!(f, "Both"),
        }
    }
}

impl FromStr for EarSide {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Right" => Ok(EarSide::Right),
            "Left" => Ok(EarSide::Left),
            "Both" => Ok(EarSide::Both),
            _ => Err(()),
        }
    }
}
