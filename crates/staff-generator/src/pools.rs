//! Fixed name pools for employee generation.
//!
//! The pools are immutable lookup tables, not configuration.

/// First names drawn uniformly at random during generation.
pub const FIRST_NAMES: [&str; 50] = [
    "Teresa",
    "Rosalinda",
    "Marimar",
    "Esmeralda",
    "Luciana",
    "Fernanda",
    "Camila",
    "Valentina",
    "Renata",
    "Isabela",
    "Paulina",
    "Jimena",
    "Gabriela",
    "Mariana",
    "Julieta",
    "Catalina",
    "Alejandra",
    "Daniela",
    "Sofía",
    "Verónica",
    "Bianca",
    "Regina",
    "Lourdes",
    "Natalia",
    "Patricia",
    "Alejandro",
    "Fernando",
    "Armando",
    "Ricardo",
    "Eduardo",
    "Sebastián",
    "Diego",
    "Mauricio",
    "Bruno",
    "Carlos",
    "Andrés",
    "Esteban",
    "Santiago",
    "León",
    "Julio",
    "Rodrigo",
    "Rafael",
    "Cristóbal",
    "Emilio",
    "Marco",
    "Joaquín",
    "Mateo",
    "Manuel",
    "Héctor",
    "Álvaro",
];

/// Last names drawn uniformly at random during generation.
pub const LAST_NAMES: [&str; 50] = [
    "Mendoza",
    "Chávez",
    "Salazar",
    "Montenegro",
    "López",
    "Hernández",
    "García",
    "Villalba",
    "Valencia",
    "Rojas",
    "Castillo",
    "Benavides",
    "Torres",
    "Rivera",
    "Flores",
    "Márquez",
    "Carrillo",
    "Duarte",
    "Castañeda",
    "Gutiérrez",
    "Herrera",
    "Camacho",
    "Álvarez",
    "Navarro",
    "Morales",
    "Cabrera",
    "Zamora",
    "Ponce",
    "Aguilar",
    "Rosales",
    "Peña",
    "Solís",
    "Cortés",
    "Ramírez",
    "Fajardo",
    "Domínguez",
    "Bravo",
    "Villaseñor",
    "Ochoa",
    "Fuentes",
    "Barrios",
    "Salinas",
    "Cárdenas",
    "Vergara",
    "Arango",
    "Paredes",
    "Beltrán",
    "Ledesma",
    "Escobar",
    "Montoya",
];
