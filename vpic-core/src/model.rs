use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// A decoded vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: String,
    pub doors: i32,
    pub body_class: VehicleType,
}

/// Domain vehicle category. API body-class strings are mapped onto these by
/// [`VehicleType::from_api`]; anything unrecognized becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum VehicleType {
    Convertible,
    Minivan,
    Coupe,
    LowSpeedVehicle,
    Hatchback,
    StandardMotorcycle,
    SportUtilityVehicle,
    CrossoverUtilityVehicle,
    Van,
    Roadster,
    Truck,
    Scooter,
    Sedan,
    Wagon,
    Bus,
    Pickup,
    Trailer,
    TractorTruck,
    Streetcar,
    AllTerrainVehicle,
    SchoolBus,
    RacingCar,
    SportMotorcycle,
    TouringMotorcycle,
    CruiserMotorcycle,
    TrikeMotorcycle,
    DirtBike,
    DualSportMotorcycle,
    EnduroVehicle,
    MiniBikeMotorcycle,
    GoKart,
    SideCarMotorcycle,
    CustomMotorcycle,
    CargoVan,
    Snowmobile,
    StreetMotorcycle,
    EnclosedThreeWheelMotorcycle,
    UnenclosedThreeWheelMotorcycle,
    Moped,
    RecreationalOffRoadVehicle,
    Motorhome,
    CrossCountryMotorcycle,
    UnderboneMotorcycle,
    StepVan,
    MotocrossVehicle,
    CompetitionMotorcycle,
    Limousine,
    SportUtilityTruck,
    GolfCart,
    #[default]
    Unknown,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        use VehicleType::*;
        match self {
            Convertible => "Convertible",
            Minivan => "Minivan",
            Coupe => "Coupe",
            LowSpeedVehicle => "Low Speed Vehicle (LSV)",
            Hatchback => "Hatchback",
            StandardMotorcycle => "Standard Motorcycle",
            SportUtilityVehicle => "Sport Utility Vehicle (SUV)",
            CrossoverUtilityVehicle => "Crossover Utility Vehicle (CUV)",
            Van => "Van",
            Roadster => "Roadster",
            Truck => "Truck",
            Scooter => "Scooter",
            Sedan => "Sedan",
            Wagon => "Wagon",
            Bus => "Bus",
            Pickup => "Pickup",
            Trailer => "Trailer",
            TractorTruck => "Tractor Truck",
            Streetcar => "Streetcar",
            AllTerrainVehicle => "All Terrain Vehicle (ATV)",
            SchoolBus => "School Bus",
            RacingCar => "Racing Car",
            SportMotorcycle => "Sport Motorcycle",
            TouringMotorcycle => "Touring Motorcycle",
            CruiserMotorcycle => "Cruiser Motorcycle",
            TrikeMotorcycle => "Trike Motorcycle",
            DirtBike => "Dirt Bike",
            DualSportMotorcycle => "Dual Sport Motorcycle",
            EnduroVehicle => "Enduro Vehicle",
            MiniBikeMotorcycle => "Minibike Motorcycle",
            GoKart => "Go Kart",
            SideCarMotorcycle => "Side Car Motorcycle",
            CustomMotorcycle => "Custom Motorcycle",
            CargoVan => "Cargo Van",
            Snowmobile => "Snowmobile",
            StreetMotorcycle => "Street Motorcycle",
            EnclosedThreeWheelMotorcycle => "Enclosed Three Wheeled Motorcycle",
            UnenclosedThreeWheelMotorcycle => "Unenclosed Three Wheeled Motorcycle",
            Moped => "Moped",
            RecreationalOffRoadVehicle => "Recreational Off-Road Vehicle (ROV)",
            Motorhome => "Motorhome",
            CrossCountryMotorcycle => "Cross Country Motorcycle",
            UnderboneMotorcycle => "Underbone Motorcycle",
            StepVan => "Step Van",
            MotocrossVehicle => "Motocross Vehicle",
            CompetitionMotorcycle => "Competition Motorcycle",
            Limousine => "Limousine",
            SportUtilityTruck => "Sport Utility Truck (SUT)",
            GolfCart => "Golf Cart",
            Unknown => "Unknown",
        }
    }

    pub const fn all() -> &'static [VehicleType] {
        use VehicleType::*;
        &[
            Convertible,
            Minivan,
            Coupe,
            LowSpeedVehicle,
            Hatchback,
            StandardMotorcycle,
            SportUtilityVehicle,
            CrossoverUtilityVehicle,
            Van,
            Roadster,
            Truck,
            Scooter,
            Sedan,
            Wagon,
            Bus,
            Pickup,
            Trailer,
            TractorTruck,
            Streetcar,
            AllTerrainVehicle,
            SchoolBus,
            RacingCar,
            SportMotorcycle,
            TouringMotorcycle,
            CruiserMotorcycle,
            TrikeMotorcycle,
            DirtBike,
            DualSportMotorcycle,
            EnduroVehicle,
            MiniBikeMotorcycle,
            GoKart,
            SideCarMotorcycle,
            CustomMotorcycle,
            CargoVan,
            Snowmobile,
            StreetMotorcycle,
            EnclosedThreeWheelMotorcycle,
            UnenclosedThreeWheelMotorcycle,
            Moped,
            RecreationalOffRoadVehicle,
            Motorhome,
            CrossCountryMotorcycle,
            UnderboneMotorcycle,
            StepVan,
            MotocrossVehicle,
            CompetitionMotorcycle,
            Limousine,
            SportUtilityTruck,
            GolfCart,
            Unknown,
        ]
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<VehicleType> for &'static str {
    fn from(value: VehicleType) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for VehicleType {
    type Error = String;

    /// Parses a display label (as produced by [`VehicleType::as_str`]), not an API string.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        VehicleType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| format!("unknown vehicle type '{value}'"))
    }
}

/// Parameters for a model listing. `year == 0` means any model year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelsRequest {
    pub make: String,
    pub year: i32,
}

impl ModelsRequest {
    pub fn new(make: impl Into<String>) -> Self {
        Self { make: make.into(), year: 0 }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}
