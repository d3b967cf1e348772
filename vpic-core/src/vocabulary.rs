//! Mapping from vPIC "Body Class" strings to [`VehicleType`].
//!
//! Matching is exact and case-sensitive. The API strings are reproduced
//! verbatim, including the trailing space the API sends on the motocross entry.

use crate::model::VehicleType;

/// Every body-class string the API is known to return, with its domain type.
/// Both SUV and SUT strings fold into `SportUtilityVehicle`.
pub const BODY_CLASSES: &[(&str, VehicleType)] = &[
    ("Cabriolet/Convertible", VehicleType::Convertible),
    ("Minivan", VehicleType::Minivan),
    ("Coupe", VehicleType::Coupe),
    (
        "Low Speed Vehicle (LSV) / Neighborhood Electric Vehicle (NEV)",
        VehicleType::LowSpeedVehicle,
    ),
    ("Hatchback/Liftback/Notchback", VehicleType::Hatchback),
    ("Motorcycle - Standard", VehicleType::StandardMotorcycle),
    (
        "Sport Utility Vehicle (SUV)/Multi Purpose Vehicle (MPV)",
        VehicleType::SportUtilityVehicle,
    ),
    ("Crossover Utility Vehicle (CUV)", VehicleType::CrossoverUtilityVehicle),
    ("Van", VehicleType::Van),
    ("Roadster", VehicleType::Roadster),
    ("Truck", VehicleType::Truck),
    ("Motorcycle - Scooter", VehicleType::Scooter),
    ("Sedan/Saloon", VehicleType::Sedan),
    ("Wagon", VehicleType::Wagon),
    ("Bus", VehicleType::Bus),
    ("Pickup", VehicleType::Pickup),
    ("Trailer", VehicleType::Trailer),
    ("Truck - Tractor", VehicleType::TractorTruck),
    ("Streetcar / Trolley", VehicleType::Streetcar),
    (
        "Off-road Vehicle - All Terrain Vehicle (ATV) (Motorcycle-style)",
        VehicleType::AllTerrainVehicle,
    ),
    ("Bus - School Bus", VehicleType::SchoolBus),
    ("Racing Car", VehicleType::RacingCar),
    ("Motorcycle - Sport", VehicleType::SportMotorcycle),
    ("Motorcycle - Touring / Sport Touring", VehicleType::TouringMotorcycle),
    ("Motorcycle - Cruiser", VehicleType::CruiserMotorcycle),
    ("Motorcycle - Trike", VehicleType::TrikeMotorcycle),
    ("Off-road Vehicle - Dirt Bike / Off-Road", VehicleType::DirtBike),
    (
        "Motorcycle - Dual Sport / Adventure / Supermoto / On/Off-road",
        VehicleType::DualSportMotorcycle,
    ),
    (
        "Off-road Vehicle - Enduro (Off-road long distance racing)",
        VehicleType::EnduroVehicle,
    ),
    ("Motorcycle - Small / Minibike", VehicleType::MiniBikeMotorcycle),
    ("Off-road Vehicle - Go Kart", VehicleType::GoKart),
    ("Motorcycle - Side Car", VehicleType::SideCarMotorcycle),
    ("Motorcycle - Custom", VehicleType::CustomMotorcycle),
    ("Cargo Van", VehicleType::CargoVan),
    ("Snowmobile", VehicleType::Snowmobile),
    ("Motorcycle - Street", VehicleType::StreetMotorcycle),
    (
        "Motorcycle - Enclosed Three Wheeled / Enclosed Autocycle",
        VehicleType::EnclosedThreeWheelMotorcycle,
    ),
    (
        "Motorcycle - Unenclosed Three Wheeled / Open Autocycle",
        VehicleType::UnenclosedThreeWheelMotorcycle,
    ),
    ("Motorcycle - Moped", VehicleType::Moped),
    (
        "Off-road Vehicle - Recreational Off-Road Vehicle (ROV)",
        VehicleType::RecreationalOffRoadVehicle,
    ),
    ("Motorhome", VehicleType::Motorhome),
    ("Motorcycle - Cross Country", VehicleType::CrossCountryMotorcycle),
    ("Motorcycle - Underbone", VehicleType::UnderboneMotorcycle),
    ("Step Van / Walk-in Van", VehicleType::StepVan),
    (
        "Off-road Vehicle - Motocross (Off-road short distance, closed track racing) ",
        VehicleType::MotocrossVehicle,
    ),
    ("Motorcycle - Competition", VehicleType::CompetitionMotorcycle),
    ("Limousine", VehicleType::Limousine),
    ("Sport Utility Truck (SUT)", VehicleType::SportUtilityVehicle),
    ("Golf Cart", VehicleType::GolfCart),
];

impl VehicleType {
    /// Map an API body-class string to a vehicle type. Never fails.
    pub fn from_api(body_class: &str) -> VehicleType {
        BODY_CLASSES
            .iter()
            .find(|(api, _)| *api == body_class)
            .map(|(_, t)| *t)
            .unwrap_or(VehicleType::Unknown)
    }
}
