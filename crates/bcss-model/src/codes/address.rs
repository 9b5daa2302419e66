use crate::pair::enumerated_pair;

enumerated_pair! {
    /// Contact type of a subject's address record.
    pub enum AddressContactType as "Address Contact Type" {
        Work = ("WORK", 13056),
        Home = ("HOME", 13057),
    }
}

enumerated_pair! {
    /// Whether an address is the registered one or a temporary override.
    pub enum AddressType as "Address Type" {
        MainRegisteredAddress = ("MAIN_REGISTERED_ADDRESS", 13042),
        TemporaryAddress = ("TEMPORARY_ADDRESS", 13043),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::EnumeratedPair;

    #[test]
    fn contact_type_round_trips_through_id() {
        assert_eq!(
            AddressContactType::resolve_by_id(13056),
            Some(AddressContactType::Work)
        );
        assert_eq!(AddressContactType::Work.symbol(), "WORK");
        assert_eq!(AddressContactType::Home.id(), 13057);
        assert_eq!(AddressContactType::resolve_by_id(99999), None);
    }

    #[test]
    fn address_type_parses_symbol() {
        assert_eq!(
            "temporary_address".parse::<AddressType>(),
            Ok(AddressType::TemporaryAddress)
        );
    }
}
