mod card;

pub use card::{
    BusinessCardDirectory, BusinessCardRecord, ContactKind, ContactRow, SocialKind, SocialLink,
    DETAIL_ROUTE,
};
