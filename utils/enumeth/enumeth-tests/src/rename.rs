use enumeth::Enumeration as _;
use enumeth::NamedType as _;
use enumeth::enumeration;

#[test]
fn rename_all() {
    #[enumeration(rename_all = "UPPERCASE")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Day {
        Monday,
        Tuesday,
    }
    assert_eq!(
        vec!["MONDAY", "TUESDAY"],
        Day::registry().names().collect::<Vec<_>>()
    );
    assert_eq!(Ok(Day::Tuesday), Day::value_of("TUESDAY"));
    assert!(Day::value_of("Tuesday").is_err());
    assert_eq!("MONDAY", format!("{}", Day::Monday));

    #[enumeration(rename_all = "snake_case")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Phase {
        NotStarted,
        InProgress,
        Done,
    }
    assert_eq!("not_started", Phase::NotStarted.name());
    assert_eq!(Ok(Phase::InProgress), "in_progress".parse::<Phase>());
    assert_eq!(2, Phase::Done.ordinal());
}

#[test]
fn rename_variant() {
    #[enumeration(rename_all = "lowercase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Answer {
        #[enumeration(rename = "Y")]
        Yes,
        No,
        r#Maybe,
    }
    assert_eq!("Answer", Answer::type_name());
    assert_eq!("Y", Answer::Yes.name());
    assert_eq!("no", Answer::No.name());
    assert_eq!("maybe", Answer::Maybe.name());
    assert_eq!(Ok(Answer::Yes), Answer::value_of("Y"));
    assert!(Answer::value_of("yes").is_err());
}

#[test]
fn explicit_discriminants() {
    #[enumeration]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Priority {
        Low = 10,
        High = 1,
    }
    assert_eq!(10, Priority::Low as i32);
    assert_eq!(1, Priority::High as i32);
    assert_eq!(0, Priority::Low.ordinal());
    assert!(Priority::Low < Priority::High);
}

#[test]
fn cfg_gated_variants() {
    #[enumeration]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Gated {
        A,
        #[cfg(any())]
        B,
        C,
    }
    assert_eq!(0, Gated::A.ordinal());
    assert_eq!(1, Gated::C.ordinal());
    assert_eq!(vec![Gated::A, Gated::C], Gated::values());
    assert!(Gated::value_of("B").is_err());
}

#[test]
fn user_provided_std_traits() {
    #[enumeration(skip_ord, skip_display)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    enum Size {
        Small,
        Large,
    }

    impl std::fmt::Display for Size {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(match self {
                Self::Small => "small size",
                Self::Large => "large size",
            })
        }
    }

    assert_eq!("small size", Size::Small.to_string());
    assert_eq!("Small", Size::Small.name());
    assert!(Size::Small < Size::Large);
    assert_eq!(Ok(Size::Large), "Large".parse::<Size>());
}
