//! Utilidades de validación
//!
//! Validación de los payloads de coches y motores antes de tocar la base
//! de datos. Las reglas se aplican en orden fijo y se corta en el primer
//! fallo: cada error lleva su propio mensaje y nunca se agregan varios.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Cow;
use validator::ValidationError;

use crate::dto::{CarRequest, EngineRequest};
use crate::models::{Engine, FuelType};

/// Primer año admitido para un coche
pub const MIN_CAR_YEAR: i32 = 1886;

/// Decimales que admite la columna cars.price (NUMERIC(12, 2))
pub const PRICE_SCALE: u32 = 2;

/// Crear un ValidationError con código y mensaje
fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Validar que un string no esté vacío (los espacios cuentan como contenido)
pub fn validate_not_empty(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error_with_message("required", message));
    }
    Ok(())
}

/// Validar que un valor sea estrictamente positivo
pub fn validate_positive<T: PartialOrd + num_traits::Zero + Serialize>(
    value: T,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = error_with_message("positive", message);
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar el año (texto) contra el rango [1886, current_year]
pub fn validate_year(year: &str, current_year: i32) -> Result<(), ValidationError> {
    if year.is_empty() {
        return Err(error_with_message("required", "year is required"));
    }
    let parsed: i32 = year
        .parse()
        .map_err(|_| error_with_message("number", "year must be a number"))?;
    if parsed < MIN_CAR_YEAR || parsed > current_year {
        let mut error = error_with_message("range", "year must be between 1886 and current year");
        error.add_param("min".into(), &MIN_CAR_YEAR);
        error.add_param("max".into(), &current_year);
        error.add_param("actual".into(), &parsed);
        return Err(error);
    }
    Ok(())
}

/// Validar el tipo de combustible
pub fn validate_fuel_type(value: &str) -> Result<(), ValidationError> {
    value.parse::<FuelType>().map(|_| ()).map_err(|_| {
        let mut error = error_with_message(
            "enum",
            "fuel type must be Petrol, Diesel, Electric or Hybrid",
        );
        error.add_param("value".into(), &value);
        error
    })
}

/// Validar la referencia al motor embebida en un CarRequest
pub fn validate_engine_reference(engine: &Engine) -> Result<(), ValidationError> {
    if engine.engine_id.is_nil() {
        return Err(error_with_message("required", "engine is required"));
    }
    validate_positive(engine.displacement, "displacement is required")?;
    validate_positive(engine.no_of_cylinders, "no of cylinders is required")?;
    validate_positive(engine.car_range, "car range is required")?;
    Ok(())
}

/// Validar el precio: positivo y sin más decimales de los que guarda la columna
pub fn validate_price(price: Decimal) -> Result<(), ValidationError> {
    validate_positive(price, "price is required")?;
    if price.normalize().scale() > PRICE_SCALE {
        let mut error = error_with_message("scale", "price must have at most 2 decimal places");
        error.add_param("value".into(), &price.to_string());
        error.add_param("max_scale".into(), &PRICE_SCALE);
        return Err(error);
    }
    Ok(())
}

/// Validar un CarRequest con el año en curso
pub fn validate_car_request(request: &CarRequest) -> Result<(), ValidationError> {
    validate_car_request_at(request, Utc::now().year())
}

/// Validar un CarRequest contra un año de referencia dado
pub fn validate_car_request_at(
    request: &CarRequest,
    current_year: i32,
) -> Result<(), ValidationError> {
    validate_not_empty(&request.name, "name is required")?;
    validate_year(&request.year, current_year)?;
    validate_not_empty(&request.brand, "brand is required")?;
    validate_fuel_type(&request.fuel_type)?;
    validate_engine_reference(&request.engine)?;
    validate_price(request.price)?;
    Ok(())
}

/// Validar un EngineRequest: cilindrada, cilindros y autonomía
pub fn validate_engine_request(request: &EngineRequest) -> Result<(), ValidationError> {
    validate_positive(request.displacement, "displacement must be greater than 0")?;
    validate_positive(request.no_of_cylinders, "no of cylinders must be greater than 0")?;
    validate_positive(request.car_range, "car range must be greater than 0")?;
    Ok(())
}
