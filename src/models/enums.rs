use serde::{Deserialize, Serialize};

use crate::schema::ValidationError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
///
/// Serde renames each variant to the same string `as_str` reports, because
/// the serde form is the on-disk JSON form and must match the legacy layout.
/// Derived `Ord` follows declaration order, so ordinal scales (prognosis,
/// pain frequency) are declared worst-to-best / most-to-least.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ValidationError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

str_enum!(ExerciseFrequency {
    None => "None",
    OneToTwoPerWeek => "1-2 times/week",
    ThreeToFourPerWeek => "3-4 times/week",
    FivePlusPerWeek => "5+ times/week",
});

str_enum!(
    /// Legacy yes/no radio answer, stored as the literal string.
    YesNo {
        Yes => "Yes",
        No => "No",
    }
);

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

str_enum!(
    /// Key of the intake pain-characteristics map.
    PainQuality {
        Sharp => "sharp",
        Shooting => "shooting",
        Aching => "aching",
        Burning => "burning",
        Tingling => "tingling",
        Numbness => "numbness",
    }
);

impl PainQuality {
    pub const ALL: [PainQuality; 6] = [
        PainQuality::Sharp,
        PainQuality::Shooting,
        PainQuality::Aching,
        PainQuality::Burning,
        PainQuality::Tingling,
        PainQuality::Numbness,
    ];
}

str_enum!(
    /// How often one pain quality occurs, on the intake form.
    QualityFrequency {
        Constant => "Constant",
        Intermittent => "Intermittent",
        Occasional => "Occasional",
    }
);

str_enum!(
    /// Overall pain frequency on a SOAP note, most frequent first.
    PainFrequency {
        Constant => "Constant",
        NearlyConstant => "Nearly Constant",
        Intermittent => "Intermittent",
        Occasional => "Occasional",
        Rare => "Rare",
    }
);

str_enum!(
    /// Five-point prognosis scale, worst first.
    Prognosis {
        Poor => "Poor",
        Fair => "Fair",
        Good => "Good",
        VeryGood => "Very Good",
        Excellent => "Excellent",
    }
);

str_enum!(
    /// Tri-state orthopedic test outcome.
    OrthoResult {
        Positive => "Positive",
        Negative => "Negative",
        NotPerformed => "Not Performed",
    }
);

str_enum!(
    /// Joint groups measured for range of motion.
    Joint {
        CervicalSpine => "cervical_spine",
        ThoracicSpine => "thoracic_spine",
        LumbarSpine => "lumbar_spine",
        Shoulders => "shoulders",
        Hips => "hips",
    }
);

impl Joint {
    pub const ALL: [Joint; 5] = [
        Joint::CervicalSpine,
        Joint::ThoracicSpine,
        Joint::LumbarSpine,
        Joint::Shoulders,
        Joint::Hips,
    ];
}

str_enum!(
    /// Movement direction of a range-of-motion measurement.
    Movement {
        Flexion => "flexion",
        Extension => "extension",
    }
);

impl Movement {
    pub const ALL: [Movement; 2] = [Movement::Flexion, Movement::Extension];
}
