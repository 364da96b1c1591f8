use ferrous_dig_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::TXT => HickoryRecordType::TXT,
        }
    }
}
