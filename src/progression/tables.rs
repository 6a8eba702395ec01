//! Level threshold and title tables
//!
//! Both tables are ordered association lists, sorted by level. Lookups
//! walk them by explicit level order rather than relying on any map's
//! key order.

/// Highest attainable level
pub const MAX_LEVEL: u32 = 100;

/// Minimum cumulative XP required for each level, ascending
pub static LEVEL_THRESHOLDS: [(u32, u64); MAX_LEVEL as usize] = [
    (1, 0), (2, 100), (3, 250), (4, 500), (5, 1000),
    (6, 1750), (7, 2500), (8, 3500), (9, 4750), (10, 6250),
    (11, 8000), (12, 10000), (13, 12500), (14, 15250), (15, 18250),
    (16, 21500), (17, 25000), (18, 28750), (19, 32750), (20, 37000),
    (21, 41500), (22, 46250), (23, 51250), (24, 56500), (25, 62000),
    (26, 67750), (27, 73750), (28, 80000), (29, 86500), (30, 93250),
    (31, 100250), (32, 107500), (33, 115000), (34, 122750), (35, 130750),
    (36, 139000), (37, 147500), (38, 156250), (39, 165250), (40, 174500),
    (41, 184000), (42, 193750), (43, 203750), (44, 214000), (45, 224500),
    (46, 235250), (47, 246250), (48, 257500), (49, 269000), (50, 280750),
    (51, 292750), (52, 305000), (53, 317500), (54, 330250), (55, 343250),
    (56, 356500), (57, 370000), (58, 383750), (59, 397750), (60, 412000),
    (61, 426500), (62, 441250), (63, 456250), (64, 471500), (65, 487000),
    (66, 502750), (67, 518750), (68, 535000), (69, 551500), (70, 568250),
    (71, 585250), (72, 602500), (73, 620000), (74, 637750), (75, 655750),
    (76, 674000), (77, 692500), (78, 711250), (79, 730250), (80, 749500),
    (81, 769000), (82, 788750), (83, 808750), (84, 829000), (85, 849500),
    (86, 870250), (87, 891250), (88, 912500), (89, 934000), (90, 955750),
    (91, 977750), (92, 1000000), (93, 1022500), (94, 1045000), (95, 1068000),
    (96, 1091500), (97, 1115500), (98, 1140000), (99, 1165000), (100, 1190500),
];

/// Titles unlocked at specific levels, ascending
pub static LEVEL_TITLES: &[(u32, &str)] = &[
    (2, "Humain ordinaire"),
    (4, "Sensitif spirituel"),
    (6, "Shinigami débutant"),
    (8, "Shinigami confirmé"),
    (10, "Apprenti du Shikai"),
    (12, "Manieur du Shikai"),
    (14, "Vice-Capitaine"),
    (16, "Maître du Kido"),
    (18, "Manieur du Bankai"),
    (20, "Capitaine du Gotei 13"),
    (22, "Capitaine d’élite"),
    (24, "Capitaine-Commandant"),
    (26, "Arrancar"),
    (28, "Arrancar confirmé"),
    (30, "Vasto Lorde"),
    (32, "Espada inférieur"),
    (34, "Espada moyen"),
    (36, "Espada supérieur"),
    (38, "Espada Primera"),
    (40, "Vizard"),
    (42, "Vizard confirmé"),
    (44, "Transcendant fusionné au Hōgyoku"),
    (46, "Être en métamorphose spirituelle"),
    (48, "Forme chrysalis"),
    (50, "Forme ultime instable"),
    (52, "Dangai User"),
    (54, "Forme Mugetsu"),
    (56, "Quincy confirmé"),
    (58, "Sternritter"),
    (60, "Sternritter élite"),
    (62, "Schutzstaffel"),
    (64, "Haut gradé du Wandenreich"),
    (66, "Souverain Quincy"),
    (68, "Membre de la Division 0"),
    (70, "Officier supérieur de la Division 0"),
    (72, "Stratège du Reiōkyū"),
    (74, "Maître du Reiatsu"),
    (76, "Hybride complet"),
    (78, "Porteur d'équilibre"),
    (80, "Gardien du cycle spirituel"),
    (82, "Harmonisateur du flux"),
    (84, "Émissaire royal"),
    (86, "Autorité spirituelle suprême"),
    (88, "Manifestation du Getsuga"),
    (90, "Main du trône"),
    (92, "Sentinelle des mondes"),
    (94, "Pilier du Seireitei"),
    (96, "Maître des trois natures"),
    (98, "Esprit purifié"),
    (100, "Reiō (Roi Spirituel)"),
];
