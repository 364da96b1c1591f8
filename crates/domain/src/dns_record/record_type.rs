use std::fmt;
use std::str::FromStr;

/// Record types a lookup can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    MX,
    CNAME,
    TXT,
}

impl RecordType {
    pub const ALL: [RecordType; 5] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::MX,
        RecordType::CNAME,
        RecordType::TXT,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::MX => "MX",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
        }
    }

    /// Convert to wire format number (RFC 1035, RFC 3596)
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::CNAME => 5,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
        }
    }

    /// "A, AAAA, MX, CNAME, TXT"
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|rt| rt.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_supported(name: &str) -> bool {
        Self::from_str(name).is_ok()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "MX" => Ok(RecordType::MX),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            _ => Err(format!("Invalid record type: {}", s)),
        }
    }
}
