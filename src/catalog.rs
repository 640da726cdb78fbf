/// Service categories loaded by the seed operation, in insertion order.
pub const SERVICE_CATALOG: &[&str] = &[
    "Albañil",
    "Informático",
    "Mozo",
    "Programador Web",
    "Programador Front End",
    "Programador Back End",
    "Vendedor",
    "Vendedor Ambulante",
    "Ayudante de Cocina",
    "Chapista",
    "Membranas",
    "Zinguero",
    "Empleada Doméstica",
    "Enfermera - Enfermero",
    "Perforaciones",
    "Taxista",
    "Electricista",
    "Electricista del Automotor",
    "Plomero",
    "Gasista matriculado",
    "Carpintero",
    "Pintor",
    "Cerrajero",
    "Techista",
    "Colocador de cerámicos",
    "Colocador de durlock",
    "Soldador",
    "Mecánico automotor",
    "Delyvery",
    "Remisse",
    "Mecánico de motos",
    "Reparador de electrodomésticos",
    "Herrero",
    "Jardinero",
    "Podador",
    "Cuidadores de adultos mayores",
    "Niñera",
    "Maestra particular",
    "Cocinero a domicilio",
    "Delivery con moto",
    "Mudanzas y fletes",
    "Peluquero/a",
    "Manicuría y pedicuría",
    "Estética y depilación",
    "Masajista",
    "Personal trainer",
    "Entrenador deportivo",
    "Profesor de música",
    "Profesor de inglés",
    "Profesor de Matemáticas",
    "Profesor de Gimnasia",
    "Profesor de Danzas",
    "Profesor de Música",
    "Clases de apoyo escolar",
    "Diseñador gráfico",
    "Diseñador web",
    "Fotógrafo",
    "Videógrafo",
    "Community manager",
    "Desarrollador de software",
    "Técnico en computación",
    "Armado y reparación de PC",
    "Instalador de cámaras de seguridad",
    "Instalador de redes",
    "Servicio de limpieza",
    "Limpieza de vidrios",
    "Limpieza final de obra",
    "Cuidado de mascotas",
    "Paseador de perros",
    "Adiestrador canino",
    "Yesero",
    "Parquero",
    "Servicio de catering",
    "DJ para eventos",
    "Animador de fiestas infantiles",
    "Mozo para eventos",
    "Bartender",
    "Diseño de interiores",
    "Montador de muebles",
    "Costurera",
    "Modista",
    "Sastre",
    "Tapicero",
    "Tornero",
    "Gomería móvil",
    "Lavado de autos a domicilio",
    "Reparación de bicicletas",
    "Maquinista rural",
    "Peón rural",
    "Cuidador de campo",
    "Apicultor",
    "Viverista",
    "Cortador de leña",
    "Operario de maquinaria pesada",
    "Zanellero",
    "Herrador",
    "Pintura artística",
    "Diseño de tatuajes",
    "Tatuador",
    "Estilista canino",
];

/// Trims titles and drops blanks and repeats, keeping the first occurrence's position.
pub fn distinct_titles<S: AsRef<str>>(titles: &[S]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    titles
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_one_hundred_distinct_trimmed_titles() {
        assert_eq!(SERVICE_CATALOG.len(), 100);
        assert_eq!(distinct_titles(SERVICE_CATALOG).len(), SERVICE_CATALOG.len());
        assert!(SERVICE_CATALOG.iter().all(|t| t.trim() == *t && !t.is_empty()));
    }

    #[test]
    fn catalog_contains_common_trades() {
        for title in ["Plomero", "Electricista", "Gasista matriculado", "Albañil"] {
            assert!(SERVICE_CATALOG.contains(&title), "missing {title}");
        }
    }

    #[test]
    fn distinct_titles_keeps_first_occurrence_order() {
        let titles = ["Pintor", " Plomero ", "", "Pintor", "Herrero", "Plomero"];
        assert_eq!(distinct_titles(&titles), vec!["Pintor", "Plomero", "Herrero"]);
    }

    #[test]
    fn distinct_titles_is_case_sensitive() {
        let titles = ["Profesor de música", "Profesor de Música"];
        assert_eq!(distinct_titles(&titles).len(), 2);
    }
}
