//! Portuguese stop words
//!
//! Entries are stored already folded (no diacritics, lower-case) because
//! filtering runs after diacritic folding: `"não"` is listed as `"nao"`.

use std::collections::HashSet;
use std::sync::LazyLock;

const PORTUGUESE: &[&str] = &[
    // Articles
    "a", "o", "as", "os", "um", "uma", "uns", "umas",
    // Prepositions and contractions
    "de", "da", "do", "das", "dos", "em", "na", "no", "nas", "nos", "num", "numa",
    "pelo", "pela", "pelos", "pelas", "ao", "aos", "dum", "duma",
    "por", "para", "pra", "com", "sem", "sobre", "entre", "ate", "desde",
    "ante", "apos", "contra", "durante", "mediante", "perante",
    "sob", "tras", "diante", "dentro", "fora", "perto", "longe",
    // Conjunctions
    "e", "ou", "mas", "que", "se", "como", "quando", "onde",
    "porque", "embora", "contudo", "entretanto", "portanto",
    "todavia", "porem", "logo", "pois", "assim", "entao",
    // Pronouns
    "eu", "tu", "ele", "ela", "vos", "eles", "elas",
    "me", "te", "lhe", "lhes", "mim", "ti", "voce", "voces",
    "meu", "minha", "meus", "minhas", "teu", "tua", "teus", "tuas",
    "seu", "sua", "seus", "suas", "nosso", "nossa", "nossos", "nossas",
    "vosso", "vossa", "vossos", "vossas", "dele", "dela", "deles", "delas",
    "este", "esta", "estes", "estas", "esse", "essa", "esses", "essas",
    "aquele", "aquela", "aqueles", "aquelas", "isto", "isso", "aquilo",
    "qual", "quais", "quem", "cujo", "cuja", "cujos", "cujas",
    // Auxiliary and common verbs
    "ser", "estar", "ter", "haver", "ir", "vir", "dar", "fazer", "dizer",
    "ver", "saber", "poder", "querer", "ficar", "chegar", "passar",
    "sao", "foi", "foram", "era", "eram", "seja", "sejam", "sendo", "sido",
    "estao", "estava", "estavam", "esteja", "estejam", "estando", "estado",
    "tem", "teve", "tiveram", "tinha", "tinham", "tenha", "tenham", "tendo", "tido",
    "ha", "houve", "houveram", "havia", "haviam", "haja", "hajam", "havendo", "havido",
    // Adverbs
    "nao", "sim", "ja", "ainda", "mais", "menos", "muito", "pouco",
    "bem", "mal", "melhor", "pior", "sempre", "nunca", "jamais",
    "hoje", "ontem", "amanha", "agora", "depois", "antes", "cedo", "tarde",
    "aqui", "ali", "la", "ca", "ai", "aonde", "donde",
    "tambem", "apenas", "so", "somente", "mesmo", "proprio",
    "talvez", "quase", "cerca",
    "acima", "abaixo", "bastante", "demais", "deveras", "assaz",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PORTUGUESE.iter().copied().collect());

/// Whether a folded, lower-cased token is a stop word
#[must_use]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
