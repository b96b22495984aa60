use serde::{Deserialize, Serialize};

/// Especialidades del filtro de "All Doctors"
pub const SPECIALITIES: &[&str] = &[
    "General physician",
    "Gynecologist",
    "Dermatologist",
    "Pediatricians",
    "Neurologist",
    "Gastroenterologist",
];

/// Dirección de consulta del doctor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorAddress {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
}

/// Doctor tal como lo devuelve `/api/doctor/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub speciality: String,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub fees: f64,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub address: Option<DoctorAddress>,
}

fn default_available() -> bool {
    true
}

impl Doctor {
    /// Honorarios formateados con el símbolo de moneda
    pub fn fee_label(&self, currency_symbol: &str) -> String {
        if self.fees.fract() == 0.0 {
            format!("{}{}", currency_symbol, self.fees as i64)
        } else {
            format!("{}{:.2}", currency_symbol, self.fees)
        }
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Not Available"
        }
    }

    /// Comparación de especialidad sin distinguir mayúsculas
    pub fn has_speciality(&self, speciality: &str) -> bool {
        self.speciality.eq_ignore_ascii_case(speciality.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DoctorListResponse {
    pub success: bool,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_list_and_ignores_unknown_fields() {
        let body = r#"{
            "success": true,
            "doctors": [
                {"_id": "d1", "name": "Dr. Richard James", "image": "https://cdn/x.png",
                 "speciality": "General physician", "degree": "MBBS", "experience": "4 Years",
                 "about": "...", "fees": 50, "available": true,
                 "address": {"line1": "17th Cross", "line2": "Circle, Ring Road"},
                 "slots_booked": {}, "date": 1720000000}
            ]
        }"#;
        let response: DoctorListResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.doctors.len(), 1);
        let doctor = &response.doctors[0];
        assert_eq!(doctor.id, "d1");
        assert_eq!(doctor.fee_label("$"), "$50");
        assert_eq!(doctor.address.as_ref().map(|a| a.line1.as_str()), Some("17th Cross"));
    }

    #[test]
    fn logical_failure_has_no_doctors() {
        let response: DoctorListResponse =
            serde_json::from_str(r#"{"success": false, "message": "db down"}"#).unwrap();
        assert!(!response.success);
        assert!(response.doctors.is_empty());
        assert_eq!(response.message.as_deref(), Some("db down"));
    }

    #[test]
    fn labels() {
        let mut doctor: Doctor = serde_json::from_str(
            r#"{"_id":"d2","name":"Dr. Emily","speciality":"Gynecologist","fees":62.5}"#,
        )
        .unwrap();
        assert!(doctor.available);
        assert_eq!(doctor.fee_label("€"), "€62.50");
        assert!(doctor.has_speciality(" gynecologist"));
        doctor.available = false;
        assert_eq!(doctor.availability_label(), "Not Available");
    }
}
