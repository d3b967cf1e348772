//! Turns a raw `decodevin` payload into a [`Vehicle`].
//!
//! The API answers with a flat list of `{Variable, Value}` records. Only a
//! handful of variables are used; for those, the last non-null value wins.

use serde::Deserialize;

use crate::{
    error::{Result, VpicError},
    model::{Vehicle, VehicleType},
};

/// Raw `decodevin` response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecodeVinResponse {
    #[serde(rename = "SearchCriteria", default)]
    pub search_criteria: String,
    #[serde(rename = "Results", default)]
    pub results: Vec<RawField>,
}

/// One `{Variable, Value}` record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    #[serde(rename = "Variable")]
    pub variable: String,
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

impl RawField {
    pub fn new(variable: impl Into<String>, value: Option<&str>) -> Self {
        Self { variable: variable.into(), value: value.map(str::to_owned) }
    }
}

/// Variables the normalizer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiField {
    Year,
    Make,
    Model,
    Trim,
    Doors,
    BodyClass,
    ErrorCode,
    ErrorText,
}

impl ApiField {
    const COUNT: usize = 8;

    pub fn api_name(&self) -> &'static str {
        match self {
            ApiField::Year => "Model Year",
            ApiField::Make => "Make",
            ApiField::Model => "Model",
            ApiField::Trim => "Trim",
            ApiField::Doors => "Doors",
            ApiField::BodyClass => "Body Class",
            ApiField::ErrorCode => "Error Code",
            ApiField::ErrorText => "Additional Error Text",
        }
    }

    pub const fn all() -> &'static [ApiField] {
        &[
            ApiField::Year,
            ApiField::Make,
            ApiField::Model,
            ApiField::Trim,
            ApiField::Doors,
            ApiField::BodyClass,
            ApiField::ErrorCode,
            ApiField::ErrorText,
        ]
    }

    /// `None` for any variable the normalizer does not use.
    pub fn from_api_name(name: &str) -> Option<ApiField> {
        ApiField::all().iter().copied().find(|f| f.api_name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Last non-null value per [`ApiField`].
#[derive(Debug, Default)]
struct FieldValues<'a> {
    values: [Option<&'a str>; ApiField::COUNT],
}

impl<'a> FieldValues<'a> {
    fn collect(results: &'a [RawField]) -> Self {
        let mut out = Self::default();
        for record in results {
            let (Some(field), Some(value)) =
                (ApiField::from_api_name(&record.variable), record.value.as_deref())
            else {
                continue;
            };
            out.values[field.index()] = Some(value);
        }
        out
    }

    fn get(&self, field: ApiField) -> Option<&'a str> {
        self.values[field.index()]
    }

    fn text(&self, field: ApiField) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    fn int(&self, field: ApiField, name: &'static str) -> Result<i32> {
        match self.get(field) {
            None => Ok(0),
            Some(raw) => raw
                .parse::<i32>()
                .map_err(|_| VpicError::Parse { field: name, value: raw.to_string() }),
        }
    }
}

/// Build a [`Vehicle`] from a decode response, or report why the API rejected the VIN.
pub fn vehicle_from_response(response: &DecodeVinResponse) -> Result<Vehicle> {
    let values = FieldValues::collect(&response.results);

    if let Some(code) = values.get(ApiField::ErrorCode) {
        if code != "0" {
            tracing::debug!(error_code = code, "API rejected VIN");
            return Err(VpicError::InvalidVin {
                code: code.to_string(),
                text: values.get(ApiField::ErrorText).map(str::to_owned),
            });
        }
    }

    let vin = response
        .search_criteria
        .strip_prefix("VIN:")
        .unwrap_or(&response.search_criteria)
        .to_string();

    let body_class = values
        .get(ApiField::BodyClass)
        .map(VehicleType::from_api)
        .unwrap_or(VehicleType::Unknown);

    if body_class == VehicleType::Unknown {
        if let Some(raw) = values.get(ApiField::BodyClass) {
            tracing::debug!(body_class = raw, "unmapped body class");
        }
    }

    Ok(Vehicle {
        vin,
        year: values.int(ApiField::Year, "year")?,
        make: values.text(ApiField::Make),
        model: values.text(ApiField::Model),
        trim: values.text(ApiField::Trim),
        doors: values.int(ApiField::Doors, "number of doors")?,
        body_class,
    })
}
