// src/noyau/jetons.rs

/// Opérateurs reconnus (binaires + parenthèses).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^

    ParOuvrante,
    ParFermante,
}

impl Operateur {
    /// Opérateur correspondant à un caractère ASCII, sinon None.
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '^' => Some(Self::Puissance),
            '(' => Some(Self::ParOuvrante),
            ')' => Some(Self::ParFermante),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Puissance => '^',
            Self::ParOuvrante => '(',
            Self::ParFermante => ')',
        }
    }

    pub fn est_parenthese(self) -> bool {
        matches!(self, Self::ParOuvrante | Self::ParFermante)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    // Texte littéral conservé tel quel jusqu’à l’évaluation.
    Nombre(String),
    Op(Operateur),
}

/// Tokenize une chaîne (déjà normalisée) en jetons.
/// Supporte:
/// - nombres : chiffres + au plus un '.' (".5" accepté)
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Tout autre caractère (espaces, lettres, symboles) est ignoré.
/// Un second '.' termine le nombre sans être consommé : "1.2.3" -> "1.2", ".3".
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = false;
            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    break;
                }
            }
            out.push(Jeton::Nombre(chars[start..i].iter().collect()));
            continue;
        }

        // Opérateurs + parenthèses
        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Jeton::Op(op));
        }

        // Sinon : ignoré
        i += 1;
    }

    out
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Jeton::Nombre(txt) => txt.clone(),
            Jeton::Op(op) => op.symbole().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
