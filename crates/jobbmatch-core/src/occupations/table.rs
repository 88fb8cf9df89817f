//! Built-in occupation relations.
//!
//! Each edge is stored once. Lookups treat edges as undirected, except
//! career-path walks, which only follow `Progression` edges from `from` to
//! `to`.

use super::RelationKind::{self, Alternative, Progression, Related, Similar};

/// `(from, to, kind, strength)`
pub(super) const BUILTIN_RELATIONS: &[(&str, &str, RelationKind, f64)] = &[
    // Software
    ("Utvecklare", "Systemutvecklare", Similar, 0.9),
    ("Utvecklare", "Programmerare", Alternative, 0.85),
    ("Utvecklare", "Webbutvecklare", Similar, 0.8),
    ("Utvecklare", "Testare", Related, 0.55),
    ("Utvecklare", "Senior utvecklare", Progression, 0.85),
    ("Systemutvecklare", "Mjukvaruutvecklare", Alternative, 0.95),
    ("Systemutvecklare", "Frontendutvecklare", Related, 0.7),
    ("Systemutvecklare", "Backendutvecklare", Related, 0.75),
    ("Systemutvecklare", "Systemarkitekt", Progression, 0.7),
    ("Webbutvecklare", "Frontendutvecklare", Similar, 0.85),
    ("Webbutvecklare", "UX-designer", Related, 0.5),
    ("Senior utvecklare", "Tech lead", Progression, 0.8),
    ("Senior utvecklare", "Systemarkitekt", Progression, 0.75),
    ("Tech lead", "Utvecklingschef", Progression, 0.75),
    ("Utvecklingschef", "CTO", Progression, 0.65),
    ("Testare", "Testautomatiserare", Progression, 0.7),
    ("Drifttekniker", "DevOps-ingenjör", Progression, 0.75),
    ("DevOps-ingenjör", "Systemutvecklare", Related, 0.6),
    ("Dataanalytiker", "Data scientist", Progression, 0.7),
    ("Dataanalytiker", "Affärsanalytiker", Similar, 0.8),
    // Care
    ("Undersköterska", "Sjuksköterska", Progression, 0.7),
    ("Undersköterska", "Vårdbiträde", Similar, 0.8),
    ("Undersköterska", "Personlig assistent", Related, 0.6),
    ("Sjuksköterska", "Specialistsjuksköterska", Progression, 0.85),
    ("Specialistsjuksköterska", "Vårdenhetschef", Progression, 0.65),
    ("Sjuksköterska", "Barnmorska", Related, 0.6),
    // Education
    ("Lärare", "Förskollärare", Similar, 0.75),
    ("Lärare", "Speciallärare", Progression, 0.7),
    ("Lärare", "Studierektor", Progression, 0.65),
    ("Studierektor", "Rektor", Progression, 0.75),
    ("Förskollärare", "Barnskötare", Related, 0.7),
    // Finance
    ("Ekonomiassistent", "Redovisningsekonom", Progression, 0.8),
    ("Ekonomiassistent", "Löneadministratör", Similar, 0.7),
    ("Redovisningsekonom", "Controller", Progression, 0.75),
    ("Redovisningsekonom", "Revisor", Related, 0.6),
    ("Controller", "Ekonomichef", Progression, 0.7),
    // Sales and service
    ("Säljare", "Butikssäljare", Similar, 0.8),
    ("Säljare", "Kundtjänstmedarbetare", Related, 0.6),
    ("Säljare", "Key account manager", Progression, 0.7),
    ("Key account manager", "Försäljningschef", Progression, 0.7),
    ("Butikssäljare", "Butikschef", Progression, 0.65),
    ("Kundtjänstmedarbetare", "Supporttekniker", Related, 0.55),
    // Logistics and trades
    ("Lagerarbetare", "Truckförare", Related, 0.75),
    ("Lagerarbetare", "Terminalarbetare", Similar, 0.8),
    ("Lagerarbetare", "Lagerchef", Progression, 0.6),
    ("Truckförare", "Lastbilschaufför", Related, 0.5),
    ("Kock", "Souschef", Progression, 0.8),
    ("Souschef", "Köksmästare", Progression, 0.75),
    ("Kock", "Restaurangbiträde", Related, 0.55),
    ("Elektriker", "Elinstallatör", Alternative, 0.9),
    ("Snickare", "Byggnadsarbetare", Related, 0.65),
    ("Snickare", "Arbetsledare bygg", Progression, 0.65),
];
