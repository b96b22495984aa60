// ============================================================================
// PAGES - Vistas de contenido (home, doctores, perfil...)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::{Doctor, UserProfile, SPECIALITIES};
use crate::state::AppState;
use crate::utils::constants::DEFAULT_AVATAR;
use crate::utils::router::{navigate, Route};

/// Cuántos doctores se muestran en la portada
const TOP_DOCTORS: usize = 10;

fn page(class: &str, title: &str) -> Result<ElementBuilder, JsValue> {
    ElementBuilder::new("section")?
        .class("page")
        .class_if(class, true)?
        .child(ElementBuilder::new("h1")?.class("page-title").text(title).build())
}

fn paragraph(class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class(class).text(text).build())
}

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let doctors: Vec<Doctor> = state.store.doctors().into_iter().take(TOP_DOCTORS).collect();

    let all = ElementBuilder::new("button")?
        .class("btn-more")
        .text("more")
        .on_click(|_| navigate(&Route::Doctors(None)))?
        .build();

    let section = page("page-home", "Top Doctors to Book")?
        .child(paragraph("page-subtitle", "Simply browse through our extensive list of trusted doctors.")?)?
        .child(render_doctor_grid(state, &doctors)?)?
        .child(all)?
        .build();
    Ok(section)
}

pub fn render_doctors(state: &AppState, speciality: Option<&str>) -> Result<Element, JsValue> {
    let doctors = match speciality {
        Some(s) => state.store.doctors_by_speciality(s),
        None => state.store.doctors(),
    };

    let filters = ElementBuilder::new("div")?.class("speciality-filters").build();
    for &name in SPECIALITIES {
        let selected = speciality.map_or(false, |s| s.eq_ignore_ascii_case(name));
        // Volver a pulsar el filtro activo lo quita
        let target = if selected {
            Route::Doctors(None)
        } else {
            Route::Doctors(Some(name.to_string()))
        };
        let button = ElementBuilder::new("button")?
            .class("speciality-filter")
            .class_if("active", selected)?
            .text(name)
            .on_click(move |_| navigate(&target))?
            .build();
        filters.append_child(&button)?;
    }

    let section = page("page-doctors", "All Doctors")?
        .child(paragraph("page-subtitle", "Browse through the doctors specialist.")?)?
        .child(filters)?
        .child(render_doctor_grid(state, &doctors)?)?
        .build();
    Ok(section)
}

fn render_doctor_grid(state: &AppState, doctors: &[Doctor]) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("doctor-grid").build();

    if state.store.loading().doctors {
        append_child(&grid, &paragraph("page-status", "Loading doctors...")?)?;
        return Ok(grid);
    }

    if doctors.is_empty() {
        append_child(&grid, &paragraph("page-status", "No doctors found.")?)?;
        return Ok(grid);
    }

    for doctor in doctors {
        let route = Route::Appointment(doctor.id.clone());
        let card = ElementBuilder::new("div")?
            .class("doctor-card")
            .child(
                ElementBuilder::new("img")?
                    .attr("src", &doctor.image)?
                    .attr("alt", &doctor.name)?
                    .build(),
            )?
            .child(
                ElementBuilder::new("p")?
                    .class("doctor-availability")
                    .class_if("available", doctor.available)?
                    .text(doctor.availability_label())
                    .build(),
            )?
            .child(paragraph("doctor-name", &doctor.name)?)?
            .child(paragraph("doctor-speciality", &doctor.speciality)?)?
            .on_click(move |_| navigate(&route))?
            .build();
        grid.append_child(&card)?;
    }

    Ok(grid)
}

pub fn render_appointment(state: &AppState, doctor_id: &str) -> Result<Element, JsValue> {
    let Some(doctor) = state.store.doctor(doctor_id) else {
        let status = if state.store.loading().doctors {
            "Loading doctors..."
        } else {
            "Doctor not found."
        };
        let section = page("page-appointment", "Book Appointment")?
            .child(paragraph("page-status", status)?)?
            .build();
        return Ok(section);
    };

    let mut info = ElementBuilder::new("div")?
        .class("doctor-info")
        .child(
            ElementBuilder::new("img")?
                .class("doctor-photo")
                .attr("src", &doctor.image)?
                .attr("alt", &doctor.name)?
                .build(),
        )?
        .child(paragraph("doctor-name", &doctor.name)?)?;

    let credentials = match &doctor.degree {
        Some(degree) => format!("{} - {}", degree, doctor.speciality),
        None => doctor.speciality.clone(),
    };
    info = info.child(paragraph("doctor-credentials", &credentials)?)?;

    if let Some(experience) = &doctor.experience {
        info = info.child(paragraph("doctor-experience", experience)?)?;
    }
    if let Some(about) = &doctor.about {
        info = info.child(paragraph("doctor-about", about)?)?;
    }
    if let Some(address) = &doctor.address {
        let line = [address.line1.as_str(), address.line2.as_str()]
            .iter()
            .filter(|l| !l.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        if !line.is_empty() {
            info = info.child(paragraph("doctor-address", &line)?)?;
        }
    }

    let fee = format!("Appointment fee: {}", doctor.fee_label(state.store.currency_symbol()));
    info = info
        .child(paragraph("doctor-fee", &fee)?)?
        .child(paragraph("doctor-availability", doctor.availability_label())?)?;

    let section = page("page-appointment", "Book Appointment")?
        .child(info.build())?
        .build();
    Ok(section)
}

pub fn render_about() -> Result<Element, JsValue> {
    let section = page("page-about", "About Us")?
        .child(paragraph(
            "page-text",
            "We simplify the way you schedule doctor appointments and manage your health records.",
        )?)?
        .child(paragraph(
            "page-text",
            "Connecting patients with trusted healthcare providers, whenever they need it.",
        )?)?
        .build();
    Ok(section)
}

pub fn render_contact() -> Result<Element, JsValue> {
    let section = page("page-contact", "Contact Us")?
        .child(paragraph("page-text", "Our office")?)?
        .child(paragraph("page-text", "Tel: (415) 555-0132")?)?
        .child(paragraph("page-text", "Email: support@prescripto.example")?)?
        .build();
    Ok(section)
}

pub fn render_my_profile(state: &AppState) -> Result<Element, JsValue> {
    let builder = page("page-profile", "My Profile")?;

    let section = match state.store.profile() {
        Some(profile) => builder.child(render_profile_fields(&profile)?)?.build(),
        None if state.store.loading().profile => builder
            .child(paragraph("page-status", "Loading profile...")?)?
            .build(),
        None if !state.store.is_authenticated() => {
            let login = ElementBuilder::new("button")?
                .class("btn-login")
                .text("Login")
                .on_click(|_| navigate(&Route::Login))?
                .build();
            builder
                .child(paragraph("page-status", "Please log in to see your profile.")?)?
                .child(login)?
                .build()
        }
        None => builder
            .child(paragraph("page-status", "Profile unavailable.")?)?
            .build(),
    };
    Ok(section)
}

fn render_profile_fields(profile: &UserProfile) -> Result<Element, JsValue> {
    let avatar = profile.avatar().unwrap_or(DEFAULT_AVATAR);
    let list = ElementBuilder::new("dl")?.class("profile-fields").build();

    let mut rows: Vec<(&str, String)> = vec![
        ("Name", profile.name.clone()),
        ("Email", profile.email.clone()),
    ];
    if let Some(phone) = &profile.phone {
        rows.push(("Phone", phone.clone()));
    }
    if let Some(address) = &profile.address {
        rows.push(("Address", format!("{} {}", address.line1, address.line2).trim().to_string()));
    }
    if let Some(gender) = &profile.gender {
        rows.push(("Gender", gender.clone()));
    }
    if let Some(dob) = &profile.dob {
        rows.push(("Birthday", dob.clone()));
    }

    for (label, value) in rows {
        list.append_child(&ElementBuilder::new("dt")?.text(label).build())?;
        list.append_child(&ElementBuilder::new("dd")?.text(&value).build())?;
    }

    let card = ElementBuilder::new("div")?
        .class("profile-card")
        .child(
            ElementBuilder::new("img")?
                .class("profile-avatar")
                .attr("src", avatar)?
                .attr("alt", &profile.name)?
                .build(),
        )?
        .child(list)?
        .build();
    Ok(card)
}

pub fn render_my_appointments() -> Result<Element, JsValue> {
    let section = page("page-appointments", "My Appointments")?
        .child(paragraph("page-status", "You have no appointments yet.")?)?
        .build();
    Ok(section)
}
