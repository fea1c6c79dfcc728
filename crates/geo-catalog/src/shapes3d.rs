use geo_types::{CatalogEntry, Category, Domain, TopologyInfo};

/// Raw record for a solid.
struct RawSolid {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    volume: &'static str,
    surface_area: &'static str,
    faces: Option<&'static str>,
    edges: Option<&'static str>,
    vertices: Option<&'static str>,
    euler_formula: Option<&'static str>,
    properties: &'static [&'static str],
    color: &'static str,
    category: &'static str,
}

const SHAPES_3D: &[RawSolid] = &[
    // Platonic solids
    RawSolid {
        id: "tetrahedron",
        name: "Tetrahedron",
        description: "The simplest Platonic solid with four triangular faces. Every face is an equilateral triangle. The dual of itself.",
        volume: "V = (a³√2)/12",
        surface_area: "SA = √3 × a²",
        faces: Some("4 triangles"),
        edges: Some("6"),
        vertices: Some("4"),
        euler_formula: Some("4 - 6 + 4 = 2 ✓"),
        properties: &["Self-dual polyhedron", "Fire element (Plato)", "Minimum vertices for 3D", "Tetrahedral symmetry"],
        color: "#06b6d4",
        category: "platonic",
    },
    RawSolid {
        id: "cube",
        name: "Cube (Hexahedron)",
        description: "A regular polyhedron with six square faces. The only Platonic solid that tessellates 3D space. Also called a hexahedron.",
        volume: "V = s³",
        surface_area: "SA = 6s²",
        faces: Some("6 squares"),
        edges: Some("12"),
        vertices: Some("8"),
        euler_formula: Some("6 - 12 + 8 = 2 ✓"),
        properties: &["Dual: Octahedron", "Earth element (Plato)", "Space-filling", "3 edges per vertex"],
        color: "#8b5cf6",
        category: "platonic",
    },
    RawSolid {
        id: "octahedron",
        name: "Octahedron",
        description: "Eight equilateral triangular faces. Two square pyramids joined at their bases. Dual of the cube.",
        volume: "V = (√2/3) × a³",
        surface_area: "SA = 2√3 × a²",
        faces: Some("8 triangles"),
        edges: Some("12"),
        vertices: Some("6"),
        euler_formula: Some("8 - 12 + 6 = 2 ✓"),
        properties: &["Dual: Cube", "Air element (Plato)", "4 edges per vertex", "Fluorite crystal shape"],
        color: "#ec4899",
        category: "platonic",
    },
    RawSolid {
        id: "dodecahedron",
        name: "Dodecahedron",
        description: "Twelve regular pentagonal faces. Contains the golden ratio in its proportions. The shape of the universe (Plato).",
        volume: "V = ((15 + 7√5)/4) × a³",
        surface_area: "SA = 3√(25 + 10√5) × a²",
        faces: Some("12 pentagons"),
        edges: Some("30"),
        vertices: Some("20"),
        euler_formula: Some("12 - 30 + 20 = 2 ✓"),
        properties: &["Dual: Icosahedron", "Cosmos element (Plato)", "Golden ratio", "Pyritohedron crystal"],
        color: "#10b981",
        category: "platonic",
    },
    RawSolid {
        id: "icosahedron",
        name: "Icosahedron",
        description: "Twenty equilateral triangular faces. Appears nearly spherical. Used in virus structures and geodesic domes.",
        volume: "V = (5(3 + √5)/12) × a³",
        surface_area: "SA = 5√3 × a²",
        faces: Some("20 triangles"),
        edges: Some("30"),
        vertices: Some("12"),
        euler_formula: Some("20 - 30 + 12 = 2 ✓"),
        properties: &["Dual: Dodecahedron", "Water element (Plato)", "5 edges per vertex", "Virus capsids"],
        color: "#f59e0b",
        category: "platonic",
    },
    // Basic solids
    RawSolid {
        id: "sphere",
        name: "Sphere",
        description: "Every point on the surface is equidistant from the center. Maximum volume for given surface area. Perfect symmetry.",
        volume: "V = (4/3)πr³",
        surface_area: "SA = 4πr²",
        faces: None,
        edges: None,
        vertices: None,
        euler_formula: None,
        properties: &["Infinite symmetry", "No edges/vertices", "Minimum surface for volume", "Constant curvature"],
        color: "#06b6d4",
        category: "basic",
    },
    RawSolid {
        id: "hemisphere",
        name: "Hemisphere",
        description: "Half of a sphere, cut by a plane through its center. Common in architecture (domes) and astronomy.",
        volume: "V = (2/3)πr³",
        surface_area: "SA = 3πr² (curved + base)",
        faces: None,
        edges: None,
        vertices: None,
        euler_formula: None,
        properties: &["One flat circular face", "One curved surface", "Dome shape", "Half of sphere volume"],
        color: "#8b5cf6",
        category: "basic",
    },
    RawSolid {
        id: "ellipsoid",
        name: "Ellipsoid",
        description: "A sphere stretched along one or more axes. Earth is an oblate ellipsoid. Three semi-axes: a, b, c.",
        volume: "V = (4/3)πabc",
        surface_area: "SA ≈ complex formula",
        faces: None,
        edges: None,
        vertices: None,
        euler_formula: None,
        properties: &["Three semi-axes", "Oblate/Prolate types", "Earth's shape", "Rugby ball shape"],
        color: "#ec4899",
        category: "basic",
    },
    RawSolid {
        id: "cylinder",
        name: "Cylinder",
        description: "Two parallel circular bases connected by a curved surface. Common in cans, pipes, and columns.",
        volume: "V = πr²h",
        surface_area: "SA = 2πr(r + h)",
        faces: Some("2 circles + 1 curved"),
        edges: Some("2 circular"),
        vertices: None,
        euler_formula: None,
        properties: &["Two parallel bases", "Constant cross-section", "Right or oblique", "Lateral area = 2πrh"],
        color: "#10b981",
        category: "basic",
    },
    RawSolid {
        id: "cone",
        name: "Cone",
        description: "Circular base tapering to a point (apex). Ice cream cones, traffic cones, and volcanoes are examples.",
        volume: "V = (1/3)πr²h",
        surface_area: "SA = πr(r + l)",
        faces: Some("1 circle + 1 curved"),
        edges: Some("1 circular"),
        vertices: Some("1 (apex)"),
        euler_formula: None,
        properties: &["One circular base", "Slant height l = √(r² + h²)", "1/3 of cylinder volume", "Conic sections"],
        color: "#f59e0b",
        category: "basic",
    },
    RawSolid {
        id: "frustum",
        name: "Frustum",
        description: "A cone or pyramid with the top cut off parallel to the base. Buckets and lampshades are frustums.",
        volume: "V = (πh/3)(R² + Rr + r²)",
        surface_area: "SA = π(R + r)l + πR² + πr²",
        faces: None,
        edges: None,
        vertices: None,
        euler_formula: None,
        properties: &["Two circular faces", "Truncated cone", "Slant height formula", "Common in engineering"],
        color: "#8b5cf6",
        category: "basic",
    },
    RawSolid {
        id: "capsule",
        name: "Capsule",
        description: "A cylinder with hemispherical ends. Used in pills, physics simulations, and stadium roofs.",
        volume: "V = πr²h + (4/3)πr³",
        surface_area: "SA = 2πrh + 4πr²",
        faces: None,
        edges: None,
        vertices: None,
        euler_formula: None,
        properties: &["Cylinder + 2 hemispheres", "Smooth everywhere", "No edges", "Pill shape"],
        color: "#06b6d4",
        category: "basic",
    },
    RawSolid {
        id: "ovoid",
        name: "Ovoid (Egg)",
        description: "An egg-shaped solid with one end larger than the other. Found in nature as eggs and some fruits.",
        volume: "V ≈ (2/3)πab²",
        surface_area: "SA ≈ complex formula",
        faces: None,
        edges: None,
        vertices: None,
        euler_formula: None,
        properties: &["Asymmetric shape", "One end larger", "Natural form", "Stronger at narrow end"],
        color: "#ec4899",
        category: "basic",
    },
    RawSolid {
        id: "paraboloid",
        name: "Paraboloid",
        description: "Surface generated by rotating a parabola. Used in satellite dishes and reflector telescopes.",
        volume: "V = (1/2)πr²h",
        surface_area: "SA = (π/6h²)((r²+4h²)^1.5 - r³)",
        faces: None,
        edges: None,
        vertices: None,
        euler_formula: None,
        properties: &["Parabolic cross-section", "Focus point", "Reflective property", "Dish antenna shape"],
        color: "#10b981",
        category: "basic",
    },
    RawSolid {
        id: "hyperboloid",
        name: "Hyperboloid",
        description: "A doubly curved surface that can be made with straight lines. Used in cooling towers and architecture.",
        volume: "V = (πh/3)(R² + Rr + r²)",
        surface_area: "Complex calculation",
        faces: None,
        edges: None,
        vertices: None,
        euler_formula: None,
        properties: &["Ruled surface", "Doubly curved", "Cooling tower shape", "Made with straight lines"],
        color: "#f59e0b",
        category: "basic",
    },
    // Prisms
    RawSolid {
        id: "cuboid",
        name: "Cuboid (Rectangular Prism)",
        description: "Six rectangular faces with opposite faces equal. Books, bricks, and boxes are cuboids.",
        volume: "V = l × w × h",
        surface_area: "SA = 2(lw + wh + lh)",
        faces: Some("6 rectangles"),
        edges: Some("12"),
        vertices: Some("8"),
        euler_formula: Some("6 - 12 + 8 = 2 ✓"),
        properties: &["All angles 90°", "Opposite faces equal", "Space diagonal = √(l²+w²+h²)", "Box shape"],
        color: "#ec4899",
        category: "prisms",
    },
    RawSolid {
        id: "triangular-prism",
        name: "Triangular Prism",
        description: "A prism with triangular bases. Light splits into colors through a triangular prism (Newton).",
        volume: "V = (½ × b × h) × l",
        surface_area: "SA = bh + (a+b+c)l",
        faces: Some("2 triangles + 3 rectangles"),
        edges: Some("9"),
        vertices: Some("6"),
        euler_formula: Some("5 - 9 + 6 = 2 ✓"),
        properties: &["Triangular bases", "Light refraction", "Toblerone shape", "Tent shape"],
        color: "#10b981",
        category: "prisms",
    },
    RawSolid {
        id: "square-prism",
        name: "Square Prism",
        description: "A prism with square bases. When all faces are squares, it becomes a cube.",
        volume: "V = s² × h",
        surface_area: "SA = 2s² + 4sh",
        faces: Some("2 squares + 4 rectangles"),
        edges: Some("12"),
        vertices: Some("8"),
        euler_formula: Some("6 - 12 + 8 = 2 ✓"),
        properties: &["Square bases", "Right angles", "Column shape", "6 faces total"],
        color: "#8b5cf6",
        category: "prisms",
    },
    RawSolid {
        id: "pentagonal-prism",
        name: "Pentagonal Prism",
        description: "A prism with pentagonal bases. Seven faces total: two pentagons and five rectangles.",
        volume: "V = (¼√(5(5+2√5))s²) × h",
        surface_area: "SA = 2A_base + 5sh",
        faces: Some("2 pentagons + 5 rectangles"),
        edges: Some("15"),
        vertices: Some("10"),
        euler_formula: Some("7 - 15 + 10 = 2 ✓"),
        properties: &["7 faces total", "Pentagon bases", "10 vertices", "15 edges"],
        color: "#f59e0b",
        category: "prisms",
    },
    RawSolid {
        id: "prism",
        name: "Hexagonal Prism",
        description: "A prism with hexagonal bases. Pencils and some crystals have this shape. Eight faces total.",
        volume: "V = (3√3/2)s²h",
        surface_area: "SA = 3√3s² + 6sh",
        faces: Some("2 hexagons + 6 rectangles"),
        edges: Some("18"),
        vertices: Some("12"),
        euler_formula: Some("8 - 18 + 12 = 2 ✓"),
        properties: &["8 faces total", "Hexagon bases", "Pencil shape", "Honeycomb related"],
        color: "#8b5cf6",
        category: "prisms",
    },
    RawSolid {
        id: "heptagonal-prism",
        name: "Heptagonal Prism",
        description: "A prism with heptagonal (7-sided) bases. Nine faces total with 21 edges.",
        volume: "V = (7/4)s²cot(π/7) × h",
        surface_area: "SA = 2A_base + 7sh",
        faces: Some("2 heptagons + 7 rectangles"),
        edges: Some("21"),
        vertices: Some("14"),
        euler_formula: Some("9 - 21 + 14 = 2 ✓"),
        properties: &["9 faces total", "7-sided bases", "Rare in nature", "21 edges"],
        color: "#06b6d4",
        category: "prisms",
    },
    RawSolid {
        id: "octagonal-prism",
        name: "Octagonal Prism",
        description: "A prism with octagonal bases. Ten faces total. Found in some columns and architectural elements.",
        volume: "V = 2(1+√2)s²h",
        surface_area: "SA = 4(1+√2)s² + 8sh",
        faces: Some("2 octagons + 8 rectangles"),
        edges: Some("24"),
        vertices: Some("16"),
        euler_formula: Some("10 - 24 + 16 = 2 ✓"),
        properties: &["10 faces total", "Stop sign bases", "Column shape", "24 edges"],
        color: "#ec4899",
        category: "prisms",
    },
    RawSolid {
        id: "decagonal-prism",
        name: "Decagonal Prism",
        description: "A prism with decagonal (10-sided) bases. Twelve faces with 30 edges.",
        volume: "V = (5/2)s²√(5+2√5) × h",
        surface_area: "SA = 2A_base + 10sh",
        faces: Some("2 decagons + 10 rectangles"),
        edges: Some("30"),
        vertices: Some("20"),
        euler_formula: Some("12 - 30 + 20 = 2 ✓"),
        properties: &["12 faces total", "10-sided bases", "Near circular", "30 edges"],
        color: "#10b981",
        category: "prisms",
    },
    RawSolid {
        id: "dodecagonal-prism",
        name: "Dodecagonal Prism",
        description: "A prism with dodecagonal (12-sided) bases. Fourteen faces total, very close to cylindrical.",
        volume: "V = 3(2+√3)s²h",
        surface_area: "SA = 2A_base + 12sh",
        faces: Some("2 dodecagons + 12 rectangles"),
        edges: Some("36"),
        vertices: Some("24"),
        euler_formula: Some("14 - 36 + 24 = 2 ✓"),
        properties: &["14 faces total", "12-sided bases", "Almost cylindrical", "36 edges"],
        color: "#f59e0b",
        category: "prisms",
    },
    // Pyramids
    RawSolid {
        id: "pyramid",
        name: "Square Pyramid",
        description: "A square base with four triangular faces meeting at an apex. The Great Pyramid of Giza is a famous example.",
        volume: "V = (1/3) × s² × h",
        surface_area: "SA = s² + 2sl",
        faces: Some("1 square + 4 triangles"),
        edges: Some("8"),
        vertices: Some("5"),
        euler_formula: Some("5 - 8 + 5 = 2 ✓"),
        properties: &["Giza pyramid shape", "Slant height l", "Square base", "Ancient architecture"],
        color: "#06b6d4",
        category: "pyramids",
    },
    RawSolid {
        id: "triangular-pyramid",
        name: "Triangular Pyramid",
        description: "A pyramid with a triangular base. When all four faces are equilateral triangles, it's a tetrahedron.",
        volume: "V = (1/3) × A_base × h",
        surface_area: "SA = A_base + 3 × A_lateral",
        faces: Some("4 triangles"),
        edges: Some("6"),
        vertices: Some("4"),
        euler_formula: Some("4 - 6 + 4 = 2 ✓"),
        properties: &["4 triangular faces", "Simplest pyramid", "Same as tetrahedron", "4 vertices"],
        color: "#8b5cf6",
        category: "pyramids",
    },
    RawSolid {
        id: "pentagonal-pyramid",
        name: "Pentagonal Pyramid",
        description: "A pyramid with a pentagonal base and five triangular lateral faces.",
        volume: "V = (1/3) × A_base × h",
        surface_area: "SA = A_base + 5 × A_lateral",
        faces: Some("1 pentagon + 5 triangles"),
        edges: Some("10"),
        vertices: Some("6"),
        euler_formula: Some("6 - 10 + 6 = 2 ✓"),
        properties: &["Pentagon base", "5 triangular faces", "6 vertices", "10 edges"],
        color: "#ec4899",
        category: "pyramids",
    },
    RawSolid {
        id: "hexagonal-pyramid",
        name: "Hexagonal Pyramid",
        description: "A pyramid with a hexagonal base and six triangular lateral faces meeting at an apex.",
        volume: "V = (1/3) × (3√3/2)s² × h",
        surface_area: "SA = (3√3/2)s² + 6 × A_lateral",
        faces: Some("1 hexagon + 6 triangles"),
        edges: Some("12"),
        vertices: Some("7"),
        euler_formula: Some("7 - 12 + 7 = 2 ✓"),
        properties: &["Hexagon base", "6 triangular faces", "7 vertices", "12 edges"],
        color: "#10b981",
        category: "pyramids",
    },
    RawSolid {
        id: "octagonal-pyramid",
        name: "Octagonal Pyramid",
        description: "A pyramid with an octagonal base and eight triangular faces converging at a single apex.",
        volume: "V = (1/3) × 2(1+√2)s² × h",
        surface_area: "SA = A_base + 8 × A_lateral",
        faces: Some("1 octagon + 8 triangles"),
        edges: Some("16"),
        vertices: Some("9"),
        euler_formula: Some("9 - 16 + 9 = 2 ✓"),
        properties: &["Octagon base", "8 triangular faces", "9 vertices", "16 edges"],
        color: "#f59e0b",
        category: "pyramids",
    },
    // Antiprisms
    RawSolid {
        id: "square-antiprism",
        name: "Square Antiprism",
        description: "Two square faces connected by a band of eight alternating triangles. More spherical than a prism.",
        volume: "V = (1/3)(1 + √2)√(2(2+√2))s³",
        surface_area: "SA = 2s² + 4√3s²",
        faces: Some("2 squares + 8 triangles"),
        edges: Some("16"),
        vertices: Some("8"),
        euler_formula: Some("10 - 16 + 8 = 2 ✓"),
        properties: &["Twisted prism", "8 triangular faces", "More spherical", "Dual is tetragonal trapezohedron"],
        color: "#8b5cf6",
        category: "antiprisms",
    },
    RawSolid {
        id: "pentagonal-antiprism",
        name: "Pentagonal Antiprism",
        description: "Two pentagonal faces connected by ten alternating triangles. Part of icosahedral symmetry.",
        volume: "V ≈ 2.243s³",
        surface_area: "SA ≈ 7.771s²",
        faces: Some("2 pentagons + 10 triangles"),
        edges: Some("20"),
        vertices: Some("10"),
        euler_formula: Some("12 - 20 + 10 = 2 ✓"),
        properties: &["10 triangular faces", "Part of icosahedron", "5-fold symmetry", "Dual is pentagonal trapezohedron"],
        color: "#06b6d4",
        category: "antiprisms",
    },
    RawSolid {
        id: "hexagonal-antiprism",
        name: "Hexagonal Antiprism",
        description: "Two hexagonal faces connected by twelve alternating triangles twisted relative to each other.",
        volume: "V ≈ 3.873s³",
        surface_area: "SA ≈ 11.196s²",
        faces: Some("2 hexagons + 12 triangles"),
        edges: Some("24"),
        vertices: Some("12"),
        euler_formula: Some("14 - 24 + 12 = 2 ✓"),
        properties: &["12 triangular faces", "6-fold symmetry", "Twisted hexagonal prism", "More spherical"],
        color: "#ec4899",
        category: "antiprisms",
    },
    RawSolid {
        id: "octagonal-antiprism",
        name: "Octagonal Antiprism",
        description: "Two octagonal faces connected by sixteen alternating triangles. Very close to spherical shape.",
        volume: "V ≈ 6.318s³",
        surface_area: "SA ≈ 17.485s²",
        faces: Some("2 octagons + 16 triangles"),
        edges: Some("32"),
        vertices: Some("16"),
        euler_formula: Some("18 - 32 + 16 = 2 ✓"),
        properties: &["16 triangular faces", "8-fold symmetry", "Near spherical", "32 edges"],
        color: "#10b981",
        category: "antiprisms",
    },
    // Special solids
    RawSolid {
        id: "torus",
        name: "Torus",
        description: "A doughnut shape generated by rotating a circle around an external axis. Has genus 1 (one hole).",
        volume: "V = 2π²Rr²",
        surface_area: "SA = 4π²Rr",
        faces: None,
        edges: None,
        vertices: None,
        euler_formula: None,
        properties: &["Donut shape", "Genus 1 (one hole)", "R = major radius", "r = minor radius"],
        color: "#ec4899",
        category: "special",
    },
    RawSolid {
        id: "torus-knot",
        name: "Torus Knot",
        description: "A mathematical knot lying on the surface of a torus. Creates beautiful intertwined 3D curves.",
        volume: "Complex parametric",
        surface_area: "Complex calculation",
        faces: None,
        edges: None,
        vertices: None,
        euler_formula: None,
        properties: &["Continuous curve", "No endpoints", "Knotted topology", "Mathematical art"],
        color: "#10b981",
        category: "special",
    },
    RawSolid {
        id: "rhombohedron",
        name: "Rhombohedron",
        description: "A parallelepiped where all six faces are congruent rhombi. Like a cube sheared in one direction.",
        volume: "V = a³√(1-3cos²α+2cos³α)",
        surface_area: "SA = 6a²sin(α)",
        faces: Some("6 rhombi"),
        edges: Some("12"),
        vertices: Some("8"),
        euler_formula: Some("6 - 12 + 8 = 2 ✓"),
        properties: &["Sheared cube", "All faces rhombi", "Calcite crystal", "3 pairs parallel faces"],
        color: "#f59e0b",
        category: "special",
    },
    RawSolid {
        id: "stellated-octahedron",
        name: "Stellated Octahedron",
        description: "An octahedron with triangular pyramids on each face. Also called stella octangula or star tetrahedron.",
        volume: "V = (8/3) × tetrahedron",
        surface_area: "SA = 8 × equilateral triangles",
        faces: Some("8 triangular pyramids"),
        edges: Some("24"),
        vertices: Some("14"),
        euler_formula: None,
        properties: &["Two interlocking tetrahedra", "Star-shaped", "Self-dual compound", "Kepler's solid"],
        color: "#8b5cf6",
        category: "special",
    },
    RawSolid {
        id: "truncated-cube",
        name: "Truncated Cube",
        description: "A cube with corners cut off, creating 8 triangular faces and 6 octagonal faces.",
        volume: "V = (21 + 14√2)/3 × s³",
        surface_area: "SA = 2(6 + 6√2 + √3)s²",
        faces: Some("8 triangles + 6 octagons"),
        edges: Some("36"),
        vertices: Some("24"),
        euler_formula: Some("14 - 36 + 24 = 2 ✓"),
        properties: &["Archimedean solid", "Truncated Platonic", "14 faces", "All edges equal"],
        color: "#06b6d4",
        category: "special",
    },
    RawSolid {
        id: "cuboctahedron",
        name: "Cuboctahedron",
        description: "An Archimedean solid with 8 triangular and 6 square faces. Halfway between cube and octahedron.",
        volume: "V = (5√2/3)a³",
        surface_area: "SA = (6 + 2√3)a²",
        faces: Some("8 triangles + 6 squares"),
        edges: Some("24"),
        vertices: Some("12"),
        euler_formula: Some("14 - 24 + 12 = 2 ✓"),
        properties: &["Archimedean solid", "Rectified cube", "Vector equilibrium", "12 vertices"],
        color: "#ec4899",
        category: "special",
    },
    RawSolid {
        id: "truncated-tetrahedron",
        name: "Truncated Tetrahedron",
        description: "A tetrahedron with corners cut off, creating 4 triangular and 4 hexagonal faces.",
        volume: "V = (23√2/12)a³",
        surface_area: "SA = 7√3a²",
        faces: Some("4 triangles + 4 hexagons"),
        edges: Some("18"),
        vertices: Some("12"),
        euler_formula: Some("8 - 18 + 12 = 2 ✓"),
        properties: &["Archimedean solid", "8 faces total", "Truncated Platonic", "All edges equal"],
        color: "#10b981",
        category: "special",
    },
    RawSolid {
        id: "rhombicuboctahedron",
        name: "Rhombicuboctahedron",
        description: "An Archimedean solid with 8 triangles and 18 squares. Used in many architectural designs.",
        volume: "V = (12 + 10√2)/3 × a³",
        surface_area: "SA = (18 + 2√3)a²",
        faces: Some("8 triangles + 18 squares"),
        edges: Some("48"),
        vertices: Some("24"),
        euler_formula: Some("26 - 48 + 24 = 2 ✓"),
        properties: &["Archimedean solid", "26 faces", "Expanded cube", "48 edges"],
        color: "#f59e0b",
        category: "special",
    },
    RawSolid {
        id: "snub-cube",
        name: "Snub Cube",
        description: "A chiral Archimedean solid with 32 triangles and 6 squares. Has two mirror-image forms.",
        volume: "V ≈ 7.889a³",
        surface_area: "SA ≈ 19.856a²",
        faces: Some("32 triangles + 6 squares"),
        edges: Some("60"),
        vertices: Some("24"),
        euler_formula: Some("38 - 60 + 24 = 2 ✓"),
        properties: &["Archimedean solid", "Chiral (two forms)", "38 faces", "No mirror symmetry"],
        color: "#8b5cf6",
        category: "special",
    },
    RawSolid {
        id: "icosidodecahedron",
        name: "Icosidodecahedron",
        description: "An Archimedean solid with 20 triangular and 12 pentagonal faces. Related to both icosahedron and dodecahedron.",
        volume: "V = (45 + 17√5)/6 × a³",
        surface_area: "SA = (5√3 + 3√(25+10√5))a²",
        faces: Some("20 triangles + 12 pentagons"),
        edges: Some("60"),
        vertices: Some("30"),
        euler_formula: Some("32 - 60 + 30 = 2 ✓"),
        properties: &["Archimedean solid", "32 faces", "Rectified icosahedron", "Golden ratio"],
        color: "#06b6d4",
        category: "special",
    },
];

pub(crate) fn entries() -> Vec<CatalogEntry> {
    SHAPES_3D
        .iter()
        .map(|raw| {
            let topology = if raw.faces.is_some()
                || raw.edges.is_some()
                || raw.vertices.is_some()
                || raw.euler_formula.is_some()
            {
                Some(TopologyInfo {
                    faces: raw.faces.map(str::to_string),
                    edges: raw.edges.map(str::to_string),
                    vertices: raw.vertices.map(str::to_string),
                    euler_formula: raw.euler_formula.map(str::to_string),
                })
            } else {
                None
            };
            CatalogEntry {
                id: raw.id.to_string(),
                name: raw.name.to_string(),
                description: raw.description.to_string(),
                domain: Domain::ThreeD,
                category: raw.category.to_string(),
                properties: raw.properties.iter().map(|p| p.to_string()).collect(),
                formula: Some(raw.volume.to_string()),
                surface_area: Some(raw.surface_area.to_string()),
                color: raw.color.to_string(),
                topology,
            }
        })
        .collect()
}

pub(crate) fn categories() -> Vec<Category> {
    vec![
        Category::new("platonic", "Platonic Solids"),
        Category::new("basic", "Basic Solids"),
        Category::new("prisms", "Prisms"),
        Category::new("pyramids", "Pyramids"),
        Category::new("antiprisms", "Antiprisms"),
        Category::new("special", "Special"),
    ]
}
