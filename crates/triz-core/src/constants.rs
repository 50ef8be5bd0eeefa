//! Built-in TRIZ reference data.
//!
//! The 39 engineering parameters and 40 inventive principles follow the
//! classical Altshuller numbering. The contradiction matrix seed is an
//! illustrative subset of the published 39x39 table, keyed by parameter
//! name; see `MATRIX_SEED` for the exact cells.

/// A principle compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinPrinciple {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// The 39 engineering parameters, in canonical display order.
pub const ENGINEERING_PARAMETERS: [&str; 39] = [
    "Weight of moving object",
    "Weight of stationary object",
    "Length of moving object",
    "Length of stationary object",
    "Area of moving object",
    "Area of stationary object",
    "Volume of moving object",
    "Volume of stationary object",
    "Speed",
    "Force",
    "Stress or pressure",
    "Shape",
    "Stability of the object's composition",
    "Strength",
    "Duration of action of moving object",
    "Duration of action of stationary object",
    "Temperature",
    "Illumination intensity",
    "Use of energy by moving object",
    "Use of energy by stationary object",
    "Power",
    "Loss of energy",
    "Loss of substance",
    "Loss of information",
    "Loss of time",
    "Quantity of substance",
    "Reliability",
    "Measurement accuracy",
    "Manufacturing precision",
    "Object-affected harmful factors",
    "Object-generated harmful factors",
    "Ease of manufacture",
    "Ease of operation",
    "Ease of repair",
    "Adaptability or versatility",
    "Device complexity",
    "Difficulty of detecting and measuring",
    "Extent of automation",
    "Productivity",
];

/// The 40 inventive principles, ids 1..=40.
pub const BUILTIN_PRINCIPLES: [BuiltinPrinciple; 40] = [
    BuiltinPrinciple {
        id: 1,
        name: "Segmentation",
        description: "Divide an object into independent parts",
        examples: &[
            "Sectional furniture",
            "Modular computer components",
            "Sectional sofa",
        ],
    },
    BuiltinPrinciple {
        id: 2,
        name: "Taking out",
        description: "Extract the disturbing part or property from an object",
        examples: &[
            "Noise absorption in a quiet room",
            "Use of a sound-absorbing ceiling",
            "Removing seeds from fruits",
        ],
    },
    BuiltinPrinciple {
        id: 3,
        name: "Local quality",
        description: "Change an object's structure or environment from uniform to non-uniform",
        examples: &[
            "Gradient temperature tools",
            "Composite materials",
            "Pencil with eraser",
        ],
    },
    BuiltinPrinciple {
        id: 4,
        name: "Asymmetry",
        description: "Change the shape from symmetrical to asymmetrical",
        examples: &[
            "Asymmetric mixing vessels",
            "Ergonomic handles",
            "Asymmetric tire tread for better traction",
        ],
    },
    BuiltinPrinciple {
        id: 5,
        name: "Merging",
        description: "Bring closer together identical or similar objects",
        examples: &[
            "Personal computer with multiple functions",
            "Multi-function printer/scanner/copier",
            "Swiss Army knife",
        ],
    },
    BuiltinPrinciple {
        id: 6,
        name: "Universality",
        description: "Make a part or object perform multiple functions",
        examples: &[
            "Sofa that converts to a bed",
            "Child's car safety seat that converts to a stroller",
            "Multifunction power tools",
        ],
    },
    BuiltinPrinciple {
        id: 7,
        name: "Nested doll",
        description: "Place one object inside another",
        examples: &[
            "Telescoping antenna",
            "Retractable pen",
            "Nesting tables or measuring cups",
        ],
    },
    BuiltinPrinciple {
        id: 8,
        name: "Anti-weight",
        description: "Compensate for the weight of an object by merging with other objects that provide lift",
        examples: &[
            "Hydrofoil",
            "Aircraft wing design",
            "Helium balloons to support structures",
        ],
    },
    BuiltinPrinciple {
        id: 9,
        name: "Preliminary anti-action",
        description: "If an action has both harmful and useful effects, precede it with anti-actions to reduce harm",
        examples: &[
            "Buffer solution to prevent rapid pH change",
            "Pre-stressing concrete",
            "Preheating metal before deformation",
        ],
    },
    BuiltinPrinciple {
        id: 10,
        name: "Preliminary action",
        description: "Perform a required change to an object completely or partially before it is needed",
        examples: &[
            "Pre-pasted wallpaper",
            "Preheated oven",
            "Prefabricated housing components",
        ],
    },
    BuiltinPrinciple {
        id: 11,
        name: "Beforehand cushioning",
        description: "Prepare emergency means beforehand to compensate for the relatively low reliability of an object",
        examples: &[
            "Backup parachute",
            "Reserve tank",
            "Emergency generator",
        ],
    },
    BuiltinPrinciple {
        id: 12,
        name: "Equipotentiality",
        description: "Change the condition of the work in such a way that an object need not be raised or lowered",
        examples: &[
            "Locks in a canal",
            "Spring loading",
            "Self-leveling tables",
        ],
    },
    BuiltinPrinciple {
        id: 13,
        name: "The other way round",
        description: "Invert the action used to solve the problem",
        examples: &[
            "Rotating the part instead of the tool",
            "Turning a container upside-down to empty it",
            "Moving platform instead of moving person",
        ],
    },
    BuiltinPrinciple {
        id: 14,
        name: "Spheroidality – Curvature",
        description: "Instead of using rectilinear parts, surfaces, or forms, use curvilinear ones",
        examples: &[
            "Dome structures for strength",
            "Aerodynamic vehicle shapes",
            "Curved handles for better grip",
        ],
    },
    BuiltinPrinciple {
        id: 15,
        name: "Dynamics",
        description: "Make an object or its environment adjustable for optimal performance at each stage of operation",
        examples: &[
            "Adjustable steering wheel",
            "Flexible manufacturing system",
            "Variable focus lenses",
        ],
    },
    BuiltinPrinciple {
        id: 16,
        name: "Partial or excessive actions",
        description: "If 100% of an objective is hard to achieve, use slightly less or slightly more to simplify the problem",
        examples: &[
            "Overspray when painting, then remove excess",
            "Fill and then remove excess",
            "Overscan in television",
        ],
    },
    BuiltinPrinciple {
        id: 17,
        name: "Another dimension",
        description: "Move into an additional dimension, from 1D to 2D or from 2D to 3D",
        examples: &[
            "Multi-story parking or buildings",
            "3D integrated circuits",
            "Spiral conveyor",
        ],
    },
    BuiltinPrinciple {
        id: 18,
        name: "Mechanical vibration",
        description: "Cause an object to oscillate or vibrate",
        examples: &[
            "Electric toothbrush",
            "Vibrating concrete to remove air bubbles",
            "Ultrasonic cleaning",
        ],
    },
    BuiltinPrinciple {
        id: 19,
        name: "Periodic action",
        description: "Instead of continuous action, use periodic or pulsating actions",
        examples: &[
            "Pulsed welding",
            "Hammer drill",
            "Pulse jet engines",
        ],
    },
    BuiltinPrinciple {
        id: 20,
        name: "Continuity of useful action",
        description: "Make all parts of an object work at full load all the time",
        examples: &[
            "Flywheel to maintain energy during non-productive periods",
            "Continuous operation manufacturing",
            "Multi-cylinder engines for smooth operation",
        ],
    },
    BuiltinPrinciple {
        id: 21,
        name: "Skipping",
        description: "Conduct a process or certain stages at high speed",
        examples: &[
            "Flash freezing of food",
            "High-speed cutting to avoid heat damage",
            "Rapid prototyping technologies",
        ],
    },
    BuiltinPrinciple {
        id: 22,
        name: "Blessing in disguise",
        description: "Use harmful factors to achieve a positive effect",
        examples: &[
            "Friction used for braking",
            "Waste heat for heating a building",
            "Recycling harmful waste into useful products",
        ],
    },
    BuiltinPrinciple {
        id: 23,
        name: "Feedback",
        description: "Introduce feedback to improve a process or action",
        examples: &[
            "Thermostat",
            "Automatic gain control",
            "Quality control statistical processes",
        ],
    },
    BuiltinPrinciple {
        id: 24,
        name: "Intermediary",
        description: "Use an intermediary carrier article or intermediary process",
        examples: &[
            "Catalyst in chemical reactions",
            "Remote controls",
            "Package delivery service",
        ],
    },
    BuiltinPrinciple {
        id: 25,
        name: "Self-service",
        description: "Make an object serve itself or organize it to perform auxiliary functions",
        examples: &[
            "Self-sharpening lawn mower blades",
            "Halogen lamp that cleans itself",
            "Self-healing materials",
        ],
    },
    BuiltinPrinciple {
        id: 26,
        name: "Copying",
        description: "Instead of an object that is unavailable, expensive, or fragile, use simpler and inexpensive copies",
        examples: &[
            "Virtual reality",
            "Acoustic testing using holography",
            "Flight simulators",
        ],
    },
    BuiltinPrinciple {
        id: 27,
        name: "Cheap short-living objects",
        description: "Replace an expensive object with multiple cheap ones, compromising certain qualities",
        examples: &[
            "Disposable paper cups",
            "Single-use cameras",
            "Breakaway components in crash safety",
        ],
    },
    BuiltinPrinciple {
        id: 28,
        name: "Mechanics substitution",
        description: "Replace a mechanical means with a sensory means",
        examples: &[
            "Using optical, acoustic, or thermal measurement instead of mechanical measurement",
            "Electronic nose to detect chemicals",
            "Electric fields to detect changes",
        ],
    },
    BuiltinPrinciple {
        id: 29,
        name: "Pneumatics and hydraulics",
        description: "Use gas and liquid parts of an object instead of solid parts",
        examples: &[
            "Hydraulic lifts and presses",
            "Air cushions in shoes",
            "Inflatable structures",
        ],
    },
    BuiltinPrinciple {
        id: 30,
        name: "Flexible shells and thin films",
        description: "Use flexible shells and thin films instead of three-dimensional structures",
        examples: &[
            "Inflatable structures",
            "Heat shrinkable tubing",
            "Thin film solar cells",
        ],
    },
    BuiltinPrinciple {
        id: 31,
        name: "Porous materials",
        description: "Make an object porous or add porous elements",
        examples: &[
            "Drilling holes in a structure to reduce weight",
            "Porous pavement for water drainage",
            "Foam core structures",
        ],
    },
    BuiltinPrinciple {
        id: 32,
        name: "Color changes",
        description: "Change the color of an object or its external environment",
        examples: &[
            "Mood rings",
            "Chameleon fabrics",
            "Heat-sensitive inks",
        ],
    },
    BuiltinPrinciple {
        id: 33,
        name: "Homogeneity",
        description: "Make objects interact with a given object of the same material",
        examples: &[
            "Diamond cutting diamond",
            "Borosilicate glass containers for acids",
            "Self-healing materials of same composition",
        ],
    },
    BuiltinPrinciple {
        id: 34,
        name: "Discarding and recovering",
        description: "Make portions of an object that have fulfilled their functions go away",
        examples: &[
            "Dissolving medicine capsules",
            "Biodegradable packaging",
            "Ablative heat shields",
        ],
    },
    BuiltinPrinciple {
        id: 35,
        name: "Parameter changes",
        description: "Change an object's physical state or concentration",
        examples: &[
            "Freezing water to change its properties",
            "Liquefying oxygen for storage",
            "Converting powders to pellets",
        ],
    },
    BuiltinPrinciple {
        id: 36,
        name: "Phase transitions",
        description: "Use phenomena occurring during phase transitions",
        examples: &[
            "Heat pumps using phase transitions",
            "Freeze drying",
            "Shape memory alloys",
        ],
    },
    BuiltinPrinciple {
        id: 37,
        name: "Thermal expansion",
        description: "Use thermal expansion (or contraction) of materials",
        examples: &[
            "Thermal fit of parts",
            "Bimetallic thermostat",
            "Thermohydraulic engine",
        ],
    },
    BuiltinPrinciple {
        id: 38,
        name: "Strong oxidants",
        description: "Replace common air with enriched air or pure oxygen",
        examples: &[
            "Oxygen breathing for mountain climbers",
            "Enriched air for metal cutting",
            "Ozone water treatment",
        ],
    },
    BuiltinPrinciple {
        id: 39,
        name: "Inert atmosphere",
        description: "Replace a normal environment with an inert one",
        examples: &[
            "Argon atmosphere for welding reactive metals",
            "Nitrogen blanket for flammable liquids",
            "Vacuum packaging for food",
        ],
    },
    BuiltinPrinciple {
        id: 40,
        name: "Composite materials",
        description: "Change from uniform to composite materials",
        examples: &[
            "Fiberglass",
            "Carbon fiber composites",
            "Reinforced concrete",
        ],
    },
];

/// One seeded matrix cell: (improving, worsening, principle ids).
pub type MatrixSeedCell = (&'static str, &'static str, &'static [u32]);

/// Seed cells for the contradiction matrix.
///
/// "Complexity" is kept as a row/column key even though it is not one of the
/// 39 canonical names; analyses coming back from extraction use it.
pub const MATRIX_SEED: &[MatrixSeedCell] = &[
    ("Weight of moving object", "Speed", &[2, 28, 13, 38]),
    ("Weight of moving object", "Strength", &[1, 8, 40, 15]),
    ("Weight of moving object", "Reliability", &[3, 8, 10, 40]),
    ("Speed", "Weight of moving object", &[13, 14, 8, 26]),
    ("Speed", "Power", &[35, 15, 18, 34]),
    ("Speed", "Reliability", &[21, 35, 11, 28]),
    ("Reliability", "Weight of moving object", &[8, 10, 18, 37]),
    ("Reliability", "Speed", &[11, 35, 27, 28]),
    ("Reliability", "Complexity", &[10, 35, 17, 4]),
    ("Strength", "Weight of moving object", &[10, 1, 29, 35]),
    ("Strength", "Complexity", &[1, 35, 16, 11]),
    ("Strength", "Weight of stationary object", &[1, 8, 15, 34]),
    ("Complexity", "Reliability", &[6, 1, 13, 11]),
    ("Complexity", "Strength", &[13, 35, 1, 15]),
    ("Complexity", "Manufacturing precision", &[32, 26, 12, 17]),
    ("Power", "Speed", &[12, 18, 28, 31]),
    ("Power", "Loss of energy", &[19, 9, 6, 27]),
    ("Power", "Loss of time", &[35, 38, 19, 18]),
];

/// Suggested when a contradiction has no matrix cell.
pub const DEFAULT_PRINCIPLES: [&str; 3] = ["Segmentation", "Taking out", "Local quality"];

/// Placeholder name some upstream sources emit for an unresolved id.
pub const UNKNOWN_PRINCIPLE: &str = "Unknown Principle";

/// Stored in place of an empty example list on custom principles.
pub const PLACEHOLDER_EXAMPLE: &str = "No examples provided";

/// Description given to principles created inline while editing an analysis.
pub const INLINE_PRINCIPLE_DESCRIPTION: &str = "Custom principle added by user";

/// Frequently used (improving, worsening) pairs offered for quick selection.
pub const COMMON_CONTRADICTIONS: [(&str, &str); 8] = [
    ("Speed", "Weight of moving object"),
    ("Strength", "Weight of moving object"),
    ("Reliability", "Complexity"),
    ("Power", "Energy loss"),
    ("Productivity", "Complexity"),
    ("Ease of operation", "Device complexity"),
    ("Adaptability", "Reliability"),
    ("Strength", "Complexity"),
];
