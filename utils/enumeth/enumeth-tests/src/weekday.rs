use enumeth::Enumeration;
use enumeth::NamedType as _;
use enumeth::ValueOfError;
use enumeth::enumeration;

use crate::enable_tracing_for_tests;

#[enumeration]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

const DECLARED: [(Weekday, &str); 7] = [
    (Weekday::Monday, "Monday"),
    (Weekday::Tuesday, "Tuesday"),
    (Weekday::Wednesday, "Wednesday"),
    (Weekday::Thursday, "Thursday"),
    (Weekday::Friday, "Friday"),
    (Weekday::Saturday, "Saturday"),
    (Weekday::Sunday, "Sunday"),
];

#[test]
fn weekday_scenario() {
    enable_tracing_for_tests();
    assert_eq!("Weekday", Weekday::type_name());
    assert_eq!(2, Weekday::Wednesday.ordinal());
    assert_eq!("Saturday", Weekday::Saturday.name());
    assert!(Weekday::Monday.compare_to(&Weekday::Friday) < 0);
    assert_eq!(Ok(Weekday::Sunday), Weekday::value_of("Sunday"));
    assert_eq!(7, Weekday::values().len());
}

#[test]
fn ordinals_follow_declaration() {
    for (i, (day, _)) in DECLARED.iter().enumerate() {
        assert_eq!(i, day.ordinal());
        assert_eq!(Ok(i), day.try_ordinal());
        assert_eq!(Some(*day), Weekday::from_ordinal(i));
    }
    assert_eq!(None, Weekday::from_ordinal(Weekday::count()));
}

#[test]
fn names_round_trip() {
    for (day, name) in DECLARED {
        assert_eq!(name, day.name());
        assert_eq!(name, day.to_name_string());
        assert_eq!(name, day.to_string());
        assert_eq!(Ok(day), Weekday::value_of(day.name()));
        assert_eq!(Ok(day), day.name().parse::<Weekday>());
        assert_eq!(Ok(day), enumeth::value_of::<Weekday>(name));
    }
}

#[test]
fn compare_to_is_declaration_order() {
    for (i, (a, _)) in DECLARED.iter().enumerate() {
        assert_eq!(0, a.compare_to(a));
        for (b, _) in &DECLARED[i + 1..] {
            assert!(a.compare_to(b) < 0, "{a} < {b}");
            assert!(b.compare_to(a) > 0, "{b} > {a}");
            assert!(a < b);
        }
    }
    assert_eq!(-4, Weekday::Monday.compare_to(&Weekday::Friday));
    assert_eq!(6, Weekday::Sunday.compare_to(&Weekday::Monday));
}

#[test]
fn sort_by_ordinal() {
    let mut days = vec![
        Weekday::Sunday,
        Weekday::Wednesday,
        Weekday::Monday,
        Weekday::Saturday,
    ];
    days.sort();
    assert_eq!(
        vec![
            Weekday::Monday,
            Weekday::Wednesday,
            Weekday::Saturday,
            Weekday::Sunday
        ],
        days
    );
    assert_eq!(Some(Weekday::Sunday), Weekday::values().into_iter().max());
}

#[test]
fn equality_is_identity() {
    for (i, (a, _)) in DECLARED.iter().enumerate() {
        assert!(a.equals(a));
        for (j, (b, _)) in DECLARED.iter().enumerate() {
            assert_eq!(i == j, a.equals(b));
        }
    }

    // Same payload, different constants.
    assert_eq!(Weekday::Monday.is_weekend(), Weekday::Tuesday.is_weekend());
    assert!(!Weekday::Monday.equals(&Weekday::Tuesday));
    assert_ne!(Weekday::Saturday, Weekday::Sunday);
}

#[test]
fn payload() {
    let weekend: Vec<_> = Weekday::values()
        .into_iter()
        .filter(|day| day.is_weekend())
        .collect();
    assert_eq!(vec![Weekday::Saturday, Weekday::Sunday], weekend);
    assert_eq!("Thursday", Weekday::Thursday.label());
}

#[test]
fn values_is_a_fresh_copy() {
    let expected: Vec<_> = DECLARED.iter().map(|(day, _)| *day).collect();
    let mut values = Weekday::values();
    assert_eq!(expected, values);

    values.reverse();
    values.truncate(2);
    values[0] = Weekday::Monday;
    assert_eq!(expected, Weekday::values());
    assert_eq!(expected, enumeth::values::<Weekday>());
}

#[test]
fn no_such_constant() {
    enable_tracing_for_tests();
    let error = Weekday::value_of("NoSuchName").unwrap_err();
    assert_eq!(
        ValueOfError::NoSuchConstant {
            type_name: "Weekday",
            name: "NoSuchName".into()
        },
        error
    );
    assert_eq!(
        "[NoSuchConstant] No enum constant Weekday.NoSuchName",
        error.to_string()
    );
    assert!("NoSuchName".parse::<Weekday>().is_err());
}

#[test]
fn exact_match_only() {
    for name in ["sunday", "SUNDAY", " Sunday", "Sunday ", "Sun", "", "Label"] {
        assert!(
            matches!(
                Weekday::value_of(name),
                Err(ValueOfError::NoSuchConstant { .. })
            ),
            "{name:?}"
        );
    }
}

#[test]
fn null_name() {
    let error = Weekday::value_of(None).unwrap_err();
    assert_eq!(ValueOfError::NullName, error);
    assert_eq!("[NullName] Name is null", error.to_string());
    assert_eq!(
        Err(ValueOfError::NullName),
        enumeth::value_of::<Weekday>(None)
    );
}

#[test]
fn owned_names() {
    let owned = String::from("Friday");
    assert_eq!(Ok(Weekday::Friday), Weekday::value_of(owned.as_str()));

    let present: Option<String> = Some("Monday".into());
    assert_eq!(Ok(Weekday::Monday), Weekday::value_of(present.as_deref()));

    let absent: Option<String> = None;
    assert_eq!(
        Err(ValueOfError::NullName),
        Weekday::value_of(absent.as_deref())
    );
    assert_eq!(
        Ok(Weekday::Monday),
        enumeth::value_of::<Weekday>(present.as_deref())
    );
}

#[test]
fn registry() {
    let registry = Weekday::registry();
    assert_eq!("Weekday", registry.type_name());
    assert_eq!(
        DECLARED.iter().map(|(_, name)| *name).collect::<Vec<_>>(),
        registry.names().collect::<Vec<_>>()
    );
    assert!(std::ptr::eq(registry, Weekday::registry()));
}
