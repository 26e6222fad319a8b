//! Site keywords and their numeric ids.
//!
//! The remote search API filters by keyword id, while users pick keywords by
//! name. The table is ordered the way the site lists them.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Id returned for names the table does not know
pub const UNKNOWN_KEYWORD_ID: u32 = 0;

/// A site-defined content tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub name: &'static str,
    pub id: u32,
}

const fn kw(name: &'static str, id: u32) -> Keyword {
    Keyword { name, id }
}

static KEYWORDS: &[Keyword] = &[
    kw("abdl", 862),
    kw("absol", 1),
    kw("abuse", 882),
    kw("age difference", 2),
    kw("aggressive retsuko", 326),
    kw("alligator", 3),
    kw("alpaca", 4),
    kw("ampharos", 827),
    kw("anal", 5),
    kw("andromorph", 875),
    kw("animal crossing", 6),
    kw("animatronic", 838),
    kw("anon-kun", 7),
    kw("anthro", 8),
    kw("anubis", 9),
    kw("apple bloom", 10),
    kw("applejack", 11),
    kw("arcanine", 12),
    kw("asgore", 13),
    kw("asriel", 14),
    kw("autofellatio", 15),
    kw("avian", 16),
    kw("badger", 17),
    kw("bambi", 18),
    kw("bandit heeler", 929),
    kw("banjo kazooie", 830),
    kw("bara", 853),
    kw("bat", 19),
    kw("bdsm", 20),
    kw("bear", 21),
    kw("beastars", 320),
    kw("belly bulge", 22),
    kw("big ass", 23),
    kw("big balls", 24),
    kw("big boobs", 25),
    kw("big mac", 26),
    kw("big penis", 27),
    kw("bird", 28),
    kw("biting", 29),
    kw("blaziken", 30),
    kw("blindfolded", 836),
    kw("blood", 31),
    kw("blowjob", 32),
    kw("bondage", 308),
    kw("boobjob", 933),
    kw("bovine", 33),
    kw("bowser", 34),
    kw("braeburn", 35),
    kw("braixen", 36),
    kw("breloom", 37),
    kw("brother and sister", 876),
    kw("buizel", 38),
    kw("bukkake", 39),
    kw("bulbasaur", 40),
    kw("bull", 867),
    kw("bunny", 41),
    kw("buttplug", 873),
    kw("canine", 42),
    kw("canine penis", 43),
    kw("casual nudity", 808),
    kw("cat", 44),
    kw("caught", 45),
    kw("charizard", 46),
    kw("charmander", 311),
    kw("charmeleon", 47),
    kw("chastity", 48),
    kw("cheetah", 49),
    kw("chespin", 50),
    kw("chief bogo", 51),
    kw("chikorita", 863),
    kw("chipmunk", 52),
    kw("choking", 822),
    kw("christmas", 53),
    kw("chubby", 865),
    kw("cinderace", 329),
    kw("cock vore", 847),
    kw("combusken", 54),
    kw("condom", 831),
    kw("corruption", 885),
    kw("cow", 55),
    kw("creampie", 56),
    kw("creampie eating", 872),
    kw("crocodile", 874),
    kw("crossdressing", 57),
    kw("cubone", 817),
    kw("cuckold", 922),
    kw("cucksibold", 59),
    kw("cum in ass", 800),
    kw("cum in mouth", 60),
    kw("cum inside", 799),
    kw("cum on boobs", 934),
    kw("cum on face", 803),
    kw("cumflation", 61),
    kw("cumshot", 62),
    kw("cunnilingus", 63),
    kw("curvy", 64),
    kw("cute", 65),
    kw("dad x son", 899),
    kw("deepthroat", 856),
    kw("deer", 66),
    kw("deino", 67),
    kw("demon", 68),
    kw("derpy", 69),
    kw("dewott", 826),
    kw("diaper", 70),
    kw("dick on dick", 71),
    kw("digestion", 805),
    kw("digimon", 72),
    kw("dinosaur", 73),
    kw("discord", 74),
    kw("dog", 75),
    kw("donkey", 76),
    kw("double penetration", 77),
    kw("double penis", 818),
    kw("draenei", 78),
    kw("dragon", 79),
    kw("duck", 80),
    kw("dust", 81),
    kw("e-stim", 866),
    kw("eevee", 82),
    kw("eggs", 83),
    kw("elephant", 84),
    kw("elf", 85),
    kw("emolga", 86),
    kw("emotional", 87),
    kw("enfield", 935),
    kw("equine", 88),
    kw("espeon", 89),
    kw("excessive cum", 802),
    kw("exhibitionism", 901),
    kw("facesitting", 90),
    kw("falco lombardi", 91),
    kw("fanmadeby:tricksta", 918),
    kw("fat", 92),
    kw("father and daugher", 878),
    kw("father and son", 879),
    kw("feet", 93),
    kw("feline", 94),
    kw("femboy", 95),
    kw("femdom", 96),
    kw("fennec", 97),
    kw("fennekin", 98),
    kw("feral", 99),
    kw("feral penis", 100),
    kw("feral vagina", 101),
    kw("feraligatr", 102),
    kw("fetish", 894),
    kw("fidget", 103),
    kw("fingering", 104),
    kw("finnick", 105),
    kw("fisting", 106),
    kw("fizzle", 107),
    kw("flamedramon", 108),
    kw("flareon", 109),
    kw("fluttershy", 110),
    kw("flygon", 111),
    kw("fnaf", 112),
    kw("footjob", 113),
    kw("foreskin", 798),
    kw("fox", 114),
    kw("fox mccloud", 115),
    kw("frog", 317),
    kw("frogadier", 116),
    kw("frotting", 117),
    kw("gag", 861),
    kw("gangbang", 868),
    kw("gaping", 837),
    kw("garble", 118),
    kw("garchomp", 119),
    kw("gardevoir", 120),
    kw("gatomon", 121),
    kw("gay", 892),
    kw("gay sex", 891),
    kw("gazelle", 123),
    kw("gilda", 124),
    kw("giraffe", 125),
    kw("glaceon", 126),
    kw("gloryhole", 923),
    kw("goat", 127),
    kw("goblin", 128),
    kw("goo creature", 129),
    kw("goodra", 330),
    kw("gore", 887),
    kw("gouhin", 324),
    kw("greninja", 130),
    kw("griffin", 131),
    kw("group", 132),
    kw("group sex", 893),
    kw("grovyle", 133),
    kw("growlithe", 134),
    kw("growth", 902),
    kw("guardians of the galaxy", 813),
    kw("gym", 840),
    kw("haida", 327),
    kw("hamster", 921),
    kw("handjob", 135),
    kw("hands free", 857),
    kw("hard vore", 136),
    kw("harness", 835),
    kw("herm", 305),
    kw("hero to villain conversion", 888),
    kw("ho-oh", 924),
    kw("horse", 137),
    kw("horsecock", 138),
    kw("houndoom", 139),
    kw("houndor", 824),
    kw("human", 140),
    kw("humiliation", 141),
    kw("husky", 881),
    kw("hydreigon", 142),
    kw("hyena", 143),
    kw("hyper", 144),
    kw("hypnosis", 145),
    kw("impmon", 146),
    kw("impregnation", 806),
    kw("in heat", 147),
    kw("in public", 148),
    kw("incest", 149),
    kw("incineroar", 313),
    kw("inflation", 150),
    kw("intersex", 927),
    kw("isabelle", 151),
    kw("jack", 323),
    kw("jackal", 152),
    kw("jolteon", 153),
    kw("judy hopps", 154),
    kw("kalista", 155),
    kw("kangaroo", 156),
    kw("kindred", 157),
    kw("king sombra", 158),
    kw("kissing", 159),
    kw("knot", 932),
    kw("knotting", 160),
    kw("knuckles", 161),
    kw("kommo-o", 162),
    kw("krystal", 163),
    kw("kung fu panda", 890),
    kw("lapras", 332),
    kw("latex", 829),
    kw("leafeon", 164),
    kw("league of legends", 165),
    kw("leavanny", 166),
    kw("legoshi", 321),
    kw("lemur", 167),
    kw("leopard", 168),
    kw("licking", 169),
    kw("lion", 170),
    kw("litten", 318),
    kw("lizard", 171),
    kw("locker room", 839),
    kw("long story", 172),
    kw("loona", 833),
    kw("lopunny", 173),
    kw("louis", 325),
    kw("lucario", 174),
    kw("lugia", 175),
    kw("luxray", 176),
    kw("lycanroc", 177),
    kw("lynx", 178),
    kw("macro", 871),
    kw("magic", 179),
    kw("maid", 312),
    kw("masturbation", 180),
    kw("meowth", 815),
    kw("mewtwo", 319),
    kw("milk", 309),
    kw("minccino", 819),
    kw("mind control", 883),
    kw("minun", 820),
    kw("misdreavus", 181),
    kw("monkey", 182),
    kw("monster", 183),
    kw("mordecai (regular show)", 810),
    kw("mother and daughter", 880),
    kw("mother and son", 807),
    kw("mouse", 184),
    kw("muscular", 185),
    kw("musk", 920),
    kw("nasus", 186),
    kw("nick wilde", 187),
    kw("night elf", 188),
    kw("ninetales", 189),
    kw("non-anthro", 834),
    kw("okapi", 190),
    kw("on top", 916),
    kw("oral", 315),
    kw("orc", 191),
    kw("orca", 192),
    kw("orgy", 844),
    kw("oryx", 193),
    kw("otter", 194),
    kw("outside", 195),
    kw("ox", 196),
    kw("pachirisu", 197),
    kw("pancham", 825),
    kw("panda", 198),
    kw("pandaren", 199),
    kw("panther", 200),
    kw("pat (bluey)", 930),
    kw("pegging", 201),
    kw("photography", 202),
    kw("pichu", 821),
    kw("pig", 203),
    kw("pikachu", 204),
    kw("pinkie pie", 205),
    kw("polar bear", 206),
    kw("police", 207),
    kw("pony", 208),
    kw("portal panties", 809),
    kw("power bottom", 917),
    kw("presenting", 333),
    kw("princess cadance", 209),
    kw("princess celestia", 210),
    kw("princess luna", 211),
    kw("public indecency", 900),
    kw("public sex", 905),
    kw("purugly", 814),
    kw("queen chrysalis", 212),
    kw("quilava", 310),
    kw("rabbit", 213),
    kw("raccoon", 214),
    kw("raichu", 215),
    kw("rainbow dash", 216),
    kw("rapidash", 852),
    kw("raptor", 218),
    kw("rarity", 219),
    kw("rat", 220),
    kw("ratchet", 221),
    kw("rattata", 222),
    kw("reality warping", 884),
    kw("red panda", 224),
    kw("regular show", 812),
    kw("removing_the_comic_because_of_tos", 919),
    kw("renamon", 225),
    kw("renekton", 226),
    kw("revenge", 227),
    kw("rhino", 228),
    kw("riding", 915),
    kw("rigby (regular show)", 811),
    kw("rimjob", 906),
    kw("rimming", 229),
    kw("riolu", 230),
    kw("robot", 231),
    kw("rocket raccoon", 232),
    kw("rogue the bat", 233),
    kw("role reversal", 845),
    kw("romantic", 234),
    kw("ronno", 235),
    kw("sabertooth", 236),
    kw("saliva", 237),
    kw("sally acorn", 238),
    kw("sandshrew", 239),
    kw("scalie", 240),
    kw("scat", 869),
    kw("sceptile", 241),
    kw("scissoring", 242),
    kw("scizor", 243),
    kw("scootaloo", 244),
    kw("scratching", 850),
    kw("sea lion", 245),
    kw("sex change", 246),
    kw("sex slave", 889),
    kw("sex toy", 247),
    kw("sexting", 848),
    kw("shark", 248),
    kw("sheath play", 801),
    kw("sheep", 249),
    kw("shibari", 859),
    kw("shining armor", 250),
    kw("shinx", 251),
    kw("siblings", 877),
    kw("size difference", 252),
    kw("skunk", 253),
    kw("sleeping", 331),
    kw("slime creature", 254),
    kw("slit", 307),
    kw("sly cooper", 255),
    kw("small boobs", 860),
    kw("snake", 256),
    kw("sneasel", 257),
    kw("sniffing", 842),
    kw("solo", 903),
    kw("sonic the hedgehog", 258),
    kw("soraka", 259),
    kw("spanking", 260),
    kw("spike", 261),
    kw("spitroast", 904),
    kw("spyro", 306),
    kw("squirrel", 262),
    kw("starfox", 908),
    kw("story", 263),
    kw("straight to gay conversion", 886),
    kw("strangulation", 823),
    kw("strapon", 931),
    kw("streaking", 870),
    kw("surprise gay", 264),
    kw("surprise sex", 928),
    kw("sweaty", 265),
    kw("sweetie belle", 266),
    kw("sylveon", 267),
    kw("tadano", 328),
    kw("tail play", 804),
    kw("tailfucking", 268),
    kw("tauren", 269),
    kw("tentacles", 270),
    kw("threesome", 832),
    kw("tickling", 828),
    kw("tiger", 275),
    kw("titjob", 276),
    kw("toriel", 277),
    kw("torracat", 314),
    kw("torture", 849),
    kw("trans", 858),
    kw("transformation", 278),
    kw("treecko", 279),
    kw("trixie", 280),
    kw("troll", 281),
    kw("turtle", 282),
    kw("twilight sparkle", 283),
    kw("twink", 843),
    kw("twokinds", 284),
    kw("typhlosion", 316),
    kw("umbreon", 285),
    kw("undertale", 286),
    kw("underwear", 841),
    kw("unicorn", 287),
    kw("unwilling", 288),
    kw("vaginal", 289),
    kw("vaporeon", 290),
    kw("violence", 291),
    kw("vore", 292),
    kw("vulpix", 293),
    kw("watersports", 294),
    kw("weavile", 295),
    kw("werewolf", 296),
    kw("wolf", 297),
    kw("worgen", 298),
    kw("workplace sex", 907),
    kw("yaoi", 864),
    kw("yveltal", 299),
    kw("zapdos", 926),
    kw("zebra", 300),
    kw("zed", 301),
    kw("zeraora", 851),
    kw("zootopia", 302),
    kw("zoroark", 303),
    kw("zorua", 304),
    kw("zygarde", 925),
];

static INDEX: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| KEYWORDS.iter().map(|k| (k.name, k.id)).collect());

/// All keywords in table order
pub fn all() -> &'static [Keyword] {
    KEYWORDS
}

/// Keyword names in table order
pub fn names() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|k| k.name)
}

/// Resolve a keyword name to its id, or [`UNKNOWN_KEYWORD_ID`]
pub fn lookup(name: &str) -> u32 {
    INDEX.get(name).copied().unwrap_or(UNKNOWN_KEYWORD_ID)
}
