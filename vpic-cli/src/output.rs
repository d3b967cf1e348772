use vpic_core::Vehicle;

pub fn vehicle(vehicle: &Vehicle, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(vehicle)?);
    }

    let mut rows = vec![
        ("VIN", vehicle.vin.clone()),
        ("Year", number(vehicle.year)),
        ("Make", vehicle.make.clone()),
        ("Model", vehicle.model.clone()),
    ];
    if !vehicle.trim.is_empty() {
        rows.push(("Trim", vehicle.trim.clone()));
    }
    rows.push(("Doors", number(vehicle.doors)));
    rows.push(("Body", vehicle.body_class.to_string()));

    Ok(rows
        .into_iter()
        .map(|(k, v)| format!("{k:<6} {v}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn names(names: &[String], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(names)?);
    }
    Ok(names.join("\n"))
}

pub fn filter_names(names: Vec<String>, filter: Option<&str>) -> Vec<String> {
    let Some(filter) = filter.map(str::to_lowercase) else {
        return names;
    };
    names.into_iter().filter(|n| n.to_lowercase().contains(&filter)).collect()
}

// 0 means the API had no value.
fn number(n: i32) -> String {
    if n == 0 { "-".to_string() } else { n.to_string() }
}
