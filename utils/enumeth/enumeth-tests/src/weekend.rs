use std::sync::OnceLock;

use enumeth::Enumeration;
use enumeth::Registry;
use enumeth::ValueOfError;

use crate::weekday::Weekday;

/// Registered by hand, without the macro.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Weekend {
    Saturday,
    Sunday,
}

impl Enumeration for Weekend {
    fn registry() -> &'static Registry<Self> {
        static REGISTRY: OnceLock<Registry<Weekend>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            Registry::new(
                "Weekend",
                [("SATURDAY", Weekend::Saturday), ("SUNDAY", Weekend::Sunday)],
            )
            .unwrap()
        })
    }
}

impl Weekend {
    fn label(self) -> &'static str {
        match self {
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

#[test]
fn hand_written_registry() {
    assert_eq!(0, Weekend::Saturday.ordinal());
    assert_eq!("SUNDAY", Weekend::Sunday.name());
    assert_eq!("Sunday", Weekend::Sunday.label());
    assert_eq!(Ok(Weekend::Sunday), Weekend::value_of("SUNDAY"));
    assert_eq!(vec![Weekend::Saturday, Weekend::Sunday], Weekend::values());
    assert!(Weekend::Saturday.compare_to(&Weekend::Sunday) < 0);
}

#[test]
fn registries_do_not_mix() {
    assert_eq!(5, Weekday::Saturday.ordinal());
    assert_eq!(0, Weekend::Saturday.ordinal());
    assert_eq!("Saturday", Weekday::Saturday.name());
    assert_eq!("SATURDAY", Weekend::Saturday.name());

    assert_eq!(
        Err(ValueOfError::NoSuchConstant {
            type_name: "Weekend",
            name: "Saturday".into()
        }),
        Weekend::value_of("Saturday")
    );
    assert_eq!(
        Err(ValueOfError::NoSuchConstant {
            type_name: "Weekday",
            name: "SATURDAY".into()
        }),
        Weekday::value_of("SATURDAY")
    );
    assert_eq!(
        Weekday::Saturday.name(),
        Weekend::value_of("SATURDAY").unwrap().label()
    );
}
