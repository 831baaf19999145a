//! The built-in language bundle.
//!
//! Each supported locale is a static key -> text table. Every table carries
//! every key in [`KEYS`]. Tables are materialized once per process and shared
//! by every [`LanguageManager`](crate::LanguageManager), so built-in sets are
//! never mutated in place.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use crate::types::TranslationSet;

/// Every message key the built-in tables translate.
pub const KEYS: &[&str] = &[
    "EmailValidator",
    "GreaterThanOrEqualValidator",
    "GreaterThanValidator",
    "LengthValidator",
    "MinimumLengthValidator",
    "MaximumLengthValidator",
    "LessThanOrEqualValidator",
    "LessThanValidator",
    "NotEmptyValidator",
    "NotEqualValidator",
    "NotNullValidator",
    "PredicateValidator",
    "AsyncPredicateValidator",
    "RegularExpressionValidator",
    "EqualValidator",
    "ExactLengthValidator",
    "InclusiveBetweenValidator",
    "ExclusiveBetweenValidator",
    "CreditCardValidator",
    "ScalePrecisionValidator",
    "EmptyValidator",
    "NullValidator",
    "EnumValidator",
    "Length_Simple",
    "MinimumLength_Simple",
    "MaximumLength_Simple",
    "ExactLength_Simple",
    "InclusiveBetween_Unclamped",
];

type Table = &'static [(&'static str, &'static str)];

/// Locale code -> table, in code order.
const TABLES: &[(&str, Table)] = &[
    ("de", GERMAN),
    ("en", ENGLISH),
    ("es", SPANISH),
    ("fr", FRENCH),
    ("it", ITALIAN),
    ("nl", DUTCH),
    ("pt", PORTUGUESE),
    ("pt-BR", BRAZILIAN_PORTUGUESE),
    ("ru", RUSSIAN),
];

static BUNDLE: LazyLock<BTreeMap<String, Arc<TranslationSet>>> = LazyLock::new(|| {
    TABLES
        .iter()
        .map(|&(code, table)| {
            let set = TranslationSet::from_entries(code, table.iter().copied());
            (code.to_string(), Arc::new(set))
        })
        .collect()
});

/// Codes of the built-in languages.
pub fn codes() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|&(code, _)| code)
}

/// Owned copies of every built-in set, in code order.
pub fn languages() -> Vec<TranslationSet> {
    BUNDLE.values().map(|set| set.as_ref().clone()).collect()
}

/// The built-in registry contents, sharing the process-wide sets.
pub(crate) fn registered() -> BTreeMap<String, Arc<TranslationSet>> {
    BUNDLE.clone()
}

/// The built-in English set, which is the default fallback.
pub(crate) fn english() -> Arc<TranslationSet> {
    BUNDLE
        .get("en")
        .cloned()
        .unwrap_or_else(|| Arc::new(TranslationSet::from_entries("en", ENGLISH.iter().copied())))
}

const ENGLISH: Table = &[
    ("EmailValidator", "'{PropertyName}' is not a valid email address."),
    ("GreaterThanOrEqualValidator", "'{PropertyName}' must be greater than or equal to '{ComparisonValue}'."),
    ("GreaterThanValidator", "'{PropertyName}' must be greater than '{ComparisonValue}'."),
    ("LengthValidator", "'{PropertyName}' must be between {MinLength} and {MaxLength} characters. You entered {TotalLength} characters."),
    ("MinimumLengthValidator", "The length of '{PropertyName}' must be at least {MinLength} characters. You entered {TotalLength} characters."),
    ("MaximumLengthValidator", "The length of '{PropertyName}' must be {MaxLength} characters or fewer. You entered {TotalLength} characters."),
    ("LessThanOrEqualValidator", "'{PropertyName}' must be less than or equal to '{ComparisonValue}'."),
    ("LessThanValidator", "'{PropertyName}' must be less than '{ComparisonValue}'."),
    ("NotEmptyValidator", "'{PropertyName}' must not be empty."),
    ("NotEqualValidator", "'{PropertyName}' must not be equal to '{ComparisonValue}'."),
    ("NotNullValidator", "'{PropertyName}' must not be empty."),
    ("PredicateValidator", "The specified condition was not met for '{PropertyName}'."),
    ("AsyncPredicateValidator", "The specified condition was not met for '{PropertyName}'."),
    ("RegularExpressionValidator", "'{PropertyName}' is not in the correct format."),
    ("EqualValidator", "'{PropertyName}' must be equal to '{ComparisonValue}'."),
    ("ExactLengthValidator", "'{PropertyName}' must be {MaxLength} characters in length. You entered {TotalLength} characters."),
    ("InclusiveBetweenValidator", "'{PropertyName}' must be between {From} and {To}. You entered {PropertyValue}."),
    ("ExclusiveBetweenValidator", "'{PropertyName}' must be between {From} and {To} (exclusive). You entered {PropertyValue}."),
    ("CreditCardValidator", "'{PropertyName}' is not a valid credit card number."),
    ("ScalePrecisionValidator", "'{PropertyName}' must not be more than {ExpectedPrecision} digits in total, with allowance for {ExpectedScale} decimals. {Digits} digits and {ActualScale} decimals were found."),
    ("EmptyValidator", "'{PropertyName}' must be empty."),
    ("NullValidator", "'{PropertyName}' must be empty."),
    ("EnumValidator", "'{PropertyName}' has a range of values which does not include '{PropertyValue}'."),
    ("Length_Simple", "'{PropertyName}' must be between {MinLength} and {MaxLength} characters."),
    ("MinimumLength_Simple", "The length of '{PropertyName}' must be at least {MinLength} characters."),
    ("MaximumLength_Simple", "The length of '{PropertyName}' must be {MaxLength} characters or fewer."),
    ("ExactLength_Simple", "'{PropertyName}' must be {MaxLength} characters in length."),
    ("InclusiveBetween_Unclamped", "'{PropertyName}' must be between {From} and {To}."),
];

const GERMAN: Table = &[
    ("EmailValidator", "'{PropertyName}' ist keine gültige E-Mail-Adresse."),
    ("GreaterThanOrEqualValidator", "Der Wert von '{PropertyName}' muss grösser oder gleich '{ComparisonValue}' sein."),
    ("GreaterThanValidator", "Der Wert von '{PropertyName}' muss grösser sein als '{ComparisonValue}'."),
    ("LengthValidator", "Die Länge von '{PropertyName}' muss zwischen {MinLength} und {MaxLength} Zeichen liegen. Es wurden {TotalLength} Zeichen eingetragen."),
    ("MinimumLengthValidator", "Die Länge von '{PropertyName}' muss größer oder gleich {MinLength} sein. Sie haben {TotalLength} Zeichen eingegeben."),
    ("MaximumLengthValidator", "Die Länge von '{PropertyName}' muss kleiner oder gleich {MaxLength} sein. Sie haben {TotalLength} Zeichen eingegeben."),
    ("LessThanOrEqualValidator", "Der Wert von '{PropertyName}' muss kleiner oder gleich '{ComparisonValue}' sein."),
    ("LessThanValidator", "Der Wert von '{PropertyName}' muss kleiner sein als '{ComparisonValue}'."),
    ("NotEmptyValidator", "'{PropertyName}' darf nicht leer sein."),
    ("NotEqualValidator", "'{PropertyName}' darf nicht '{ComparisonValue}' sein."),
    ("NotNullValidator", "'{PropertyName}' darf keinen Null-Wert aufweisen."),
    ("PredicateValidator", "Der Wert von '{PropertyName}' entspricht nicht der festgelegten Bedingung."),
    ("AsyncPredicateValidator", "Der Wert von '{PropertyName}' entspricht nicht der festgelegten Bedingung."),
    ("RegularExpressionValidator", "'{PropertyName}' weist ein ungültiges Format auf."),
    ("EqualValidator", "'{PropertyName}' muss gleich '{ComparisonValue}' sein."),
    ("ExactLengthValidator", "'{PropertyName}' muss genau {MaxLength} lang sein. Es wurden {TotalLength} eingegeben."),
    ("InclusiveBetweenValidator", "Der Wert von '{PropertyName}' muss zwischen {From} und {To} sein. Sie haben {PropertyValue} eingegeben."),
    ("ExclusiveBetweenValidator", "Der Wert von '{PropertyName}' muss zwischen {From} und {To} sein (exklusiv). Es wurde {PropertyValue} eingegeben."),
    ("CreditCardValidator", "'{PropertyName}' ist keine gültige Kreditkartennummer."),
    ("ScalePrecisionValidator", "'{PropertyName}' darf insgesamt nicht mehr als {ExpectedPrecision} Ziffern enthalten, mit Berücksichtigung von {ExpectedScale} Dezimalstellen. Es wurden {Digits} Ziffern und {ActualScale} Dezimalstellen gefunden."),
    ("EmptyValidator", "'{PropertyName}' sollte leer sein."),
    ("NullValidator", "'{PropertyName}' sollte leer sein."),
    ("EnumValidator", "'{PropertyName}' hat einen Wertebereich, der '{PropertyValue}' nicht enthält."),
    ("Length_Simple", "Die Länge von '{PropertyName}' muss zwischen {MinLength} und {MaxLength} Zeichen liegen."),
    ("MinimumLength_Simple", "Die Länge von '{PropertyName}' muss größer oder gleich {MinLength} sein."),
    ("MaximumLength_Simple", "Die Länge von '{PropertyName}' muss kleiner oder gleich {MaxLength} sein."),
    ("ExactLength_Simple", "'{PropertyName}' muss genau {MaxLength} lang sein."),
    ("InclusiveBetween_Unclamped", "Der Wert von '{PropertyName}' muss zwischen {From} und {To} sein."),
];

const SPANISH: Table = &[
    ("EmailValidator", "'{PropertyName}' no es una dirección de correo electrónico válida."),
    ("GreaterThanOrEqualValidator", "'{PropertyName}' debe ser mayor o igual que '{ComparisonValue}'."),
    ("GreaterThanValidator", "'{PropertyName}' debe ser mayor que '{ComparisonValue}'."),
    ("LengthValidator", "'{PropertyName}' debe tener una longitud entre {MinLength} y {MaxLength} caracteres. Actualmente tiene {TotalLength} caracteres."),
    ("MinimumLengthValidator", "'{PropertyName}' debe ser mayor o igual que {MinLength} caracteres. Ingresó {TotalLength} caracteres."),
    ("MaximumLengthValidator", "'{PropertyName}' debe ser menor o igual que {MaxLength} caracteres. Ingresó {TotalLength} caracteres."),
    ("LessThanOrEqualValidator", "'{PropertyName}' debe ser menor o igual que '{ComparisonValue}'."),
    ("LessThanValidator", "'{PropertyName}' debe ser menor que '{ComparisonValue}'."),
    ("NotEmptyValidator", "'{PropertyName}' no debería estar vacío."),
    ("NotEqualValidator", "'{PropertyName}' no debería ser igual a '{ComparisonValue}'."),
    ("NotNullValidator", "'{PropertyName}' no debe estar vacío."),
    ("PredicateValidator", "'{PropertyName}' no cumple con la condición especificada."),
    ("AsyncPredicateValidator", "'{PropertyName}' no cumple con la condición especificada."),
    ("RegularExpressionValidator", "'{PropertyName}' no tiene el formato correcto."),
    ("EqualValidator", "'{PropertyName}' debería ser igual a '{ComparisonValue}'."),
    ("ExactLengthValidator", "'{PropertyName}' debe tener un largo de {MaxLength} caracteres. Actualmente tiene {TotalLength} caracteres."),
    ("InclusiveBetweenValidator", "'{PropertyName}' debe estar entre {From} y {To}. Valor ingresado: {PropertyValue}."),
    ("ExclusiveBetweenValidator", "'{PropertyName}' debe estar entre {From} y {To} (exclusivo). Valor ingresado: {PropertyValue}."),
    ("CreditCardValidator", "'{PropertyName}' no es un número de tarjeta de crédito válido."),
    ("ScalePrecisionValidator", "'{PropertyName}' no debe tener más de {ExpectedPrecision} dígitos en total, con margen para {ExpectedScale} decimales. Se encontraron {Digits} dígitos y {ActualScale} decimales."),
    ("EmptyValidator", "'{PropertyName}' debe estar vacío."),
    ("NullValidator", "'{PropertyName}' debe estar vacío."),
    ("EnumValidator", "'{PropertyName}' tiene un rango de valores que no incluye '{PropertyValue}'."),
    ("Length_Simple", "'{PropertyName}' debe tener una longitud entre {MinLength} y {MaxLength} caracteres."),
    ("MinimumLength_Simple", "La longitud de '{PropertyName}' debe ser al menos {MinLength} caracteres."),
    ("MaximumLength_Simple", "La longitud de '{PropertyName}' debe ser {MaxLength} caracteres o menos."),
    ("ExactLength_Simple", "'{PropertyName}' debe tener un largo de {MaxLength} caracteres."),
    ("InclusiveBetween_Unclamped", "'{PropertyName}' debe estar entre {From} y {To}."),
];

const FRENCH: Table = &[
    ("EmailValidator", "'{PropertyName}' n'est pas une adresse email valide."),
    ("GreaterThanOrEqualValidator", "'{PropertyName}' doit être plus grand ou égal à '{ComparisonValue}'."),
    ("GreaterThanValidator", "'{PropertyName}' doit être plus grand que '{ComparisonValue}'."),
    ("LengthValidator", "'{PropertyName}' doit contenir entre {MinLength} et {MaxLength} caractères. {TotalLength} caractères ont été saisis."),
    ("MinimumLengthValidator", "'{PropertyName}' doit être supérieur ou égal à {MinLength} caractères. Vous avez saisi {TotalLength} caractères."),
    ("MaximumLengthValidator", "'{PropertyName}' doit être inférieur ou égal à {MaxLength} caractères. Vous avez saisi {TotalLength} caractères."),
    ("LessThanOrEqualValidator", "'{PropertyName}' doit être plus petit ou égal à '{ComparisonValue}'."),
    ("LessThanValidator", "'{PropertyName}' doit être plus petit que '{ComparisonValue}'."),
    ("NotEmptyValidator", "'{PropertyName}' ne doit pas être vide."),
    ("NotEqualValidator", "'{PropertyName}' ne doit pas être égal à '{ComparisonValue}'."),
    ("NotNullValidator", "'{PropertyName}' ne doit pas avoir la valeur null."),
    ("PredicateValidator", "'{PropertyName}' ne respecte pas la condition fixée."),
    ("AsyncPredicateValidator", "'{PropertyName}' ne respecte pas la condition fixée."),
    ("RegularExpressionValidator", "'{PropertyName}' n'a pas le bon format."),
    ("EqualValidator", "'{PropertyName}' doit être égal à '{ComparisonValue}'."),
    ("ExactLengthValidator", "'{PropertyName}' doit être d'une longueur de {MaxLength} caractères. {TotalLength} caractères ont été saisis."),
    ("InclusiveBetweenValidator", "'{PropertyName}' doit être entre {From} et {To}. Vous avez saisi {PropertyValue}."),
    ("ExclusiveBetweenValidator", "'{PropertyName}' doit être supérieur à {From} et inférieur à {To}. Vous avez saisi {PropertyValue}."),
    ("CreditCardValidator", "'{PropertyName}' n'est pas un numéro de carte de crédit valide."),
    ("ScalePrecisionValidator", "'{PropertyName}' ne doit pas dépasser {ExpectedPrecision} chiffres au total, avec une tolérance pour les décimales {ExpectedScale}. Les chiffres {Digits} et les décimales {ActualScale} ont été trouvés."),
    ("EmptyValidator", "'{PropertyName}' devrait être vide."),
    ("NullValidator", "'{PropertyName}' devrait être vide."),
    ("EnumValidator", "'{PropertyName}' a une plage de valeurs qui n'inclut pas '{PropertyValue}'."),
    ("Length_Simple", "'{PropertyName}' doit contenir entre {MinLength} et {MaxLength} caractères."),
    ("MinimumLength_Simple", "'{PropertyName}' doit être supérieur ou égal à {MinLength} caractères."),
    ("MaximumLength_Simple", "'{PropertyName}' doit être inférieur ou égal à {MaxLength} caractères."),
    ("ExactLength_Simple", "'{PropertyName}' doit être d'une longueur de {MaxLength} caractères."),
    ("InclusiveBetween_Unclamped", "'{PropertyName}' doit être entre {From} et {To}."),
];

const ITALIAN: Table = &[
    ("EmailValidator", "'{PropertyName}' non è un indirizzo email valido."),
    ("GreaterThanOrEqualValidator", "'{PropertyName}' deve essere maggiore o uguale a '{ComparisonValue}'."),
    ("GreaterThanValidator", "'{PropertyName}' deve essere maggiore di '{ComparisonValue}'."),
    ("LengthValidator", "'{PropertyName}' deve essere lungo tra i {MinLength} e {MaxLength} caratteri. Hai inserito {TotalLength} caratteri."),
    ("MinimumLengthValidator", "'{PropertyName}' deve essere lungo almeno {MinLength} caratteri. Hai inserito {TotalLength} caratteri."),
    ("MaximumLengthValidator", "'{PropertyName}' deve essere lungo al massimo {MaxLength} caratteri. Hai inserito {TotalLength} caratteri."),
    ("LessThanOrEqualValidator", "'{PropertyName}' deve essere minore o uguale a '{ComparisonValue}'."),
    ("LessThanValidator", "'{PropertyName}' deve essere minore di '{ComparisonValue}'."),
    ("NotEmptyValidator", "'{PropertyName}' non può essere vuoto."),
    ("NotEqualValidator", "'{PropertyName}' non può essere uguale a '{ComparisonValue}'."),
    ("NotNullValidator", "'{PropertyName}' non può essere vuoto."),
    ("PredicateValidator", "La condizione non è verificata per '{PropertyName}'."),
    ("AsyncPredicateValidator", "La condizione non è verificata per '{PropertyName}'."),
    ("RegularExpressionValidator", "'{PropertyName}' non è nel formato corretto."),
    ("EqualValidator", "'{PropertyName}' dovrebbe essere uguale a '{ComparisonValue}'."),
    ("ExactLengthValidator", "'{PropertyName}' deve essere lungo {MaxLength} caratteri. Hai inserito {TotalLength} caratteri."),
    ("InclusiveBetweenValidator", "'{PropertyName}' deve essere compreso tra {From} e {To}. Hai inserito {PropertyValue}."),
    ("ExclusiveBetweenValidator", "'{PropertyName}' deve essere compreso tra {From} e {To} (esclusivo). Hai inserito {PropertyValue}."),
    ("CreditCardValidator", "'{PropertyName}' non è un numero di carta di credito valido."),
    ("ScalePrecisionValidator", "'{PropertyName}' non può avere più di {ExpectedPrecision} cifre in totale, con una tolleranza per {ExpectedScale} decimali. Sono state trovate {Digits} cifre e {ActualScale} decimali."),
    ("EmptyValidator", "'{PropertyName}' dovrebbe essere vuoto."),
    ("NullValidator", "'{PropertyName}' dovrebbe essere vuoto."),
    ("EnumValidator", "'{PropertyName}' ha un intervallo di valori che non include '{PropertyValue}'."),
    ("Length_Simple", "'{PropertyName}' deve essere lungo tra i {MinLength} e {MaxLength} caratteri."),
    ("MinimumLength_Simple", "'{PropertyName}' deve essere lungo almeno {MinLength} caratteri."),
    ("MaximumLength_Simple", "'{PropertyName}' deve essere lungo al massimo {MaxLength} caratteri."),
    ("ExactLength_Simple", "'{PropertyName}' deve essere lungo {MaxLength} caratteri."),
    ("InclusiveBetween_Unclamped", "'{PropertyName}' deve essere compreso tra {From} e {To}."),
];

const DUTCH: Table = &[
    ("EmailValidator", "'{PropertyName}' is geen geldig email adres."),
    ("GreaterThanOrEqualValidator", "'{PropertyName}' moet groter zijn dan of gelijk zijn aan '{ComparisonValue}'."),
    ("GreaterThanValidator", "'{PropertyName}' moet groter zijn dan '{ComparisonValue}'."),
    ("LengthValidator", "'{PropertyName}' moet tussen {MinLength} en {MaxLength} karakters zijn. Er zijn {TotalLength} karakters ingevoerd."),
    ("MinimumLengthValidator", "'{PropertyName}' moet groter zijn dan of gelijk zijn aan {MinLength} karakters. Er zijn {TotalLength} karakters ingevoerd."),
    ("MaximumLengthValidator", "'{PropertyName}' moet kleiner zijn dan of gelijk zijn aan {MaxLength} karakters. Er zijn {TotalLength} karakters ingevoerd."),
    ("LessThanOrEqualValidator", "'{PropertyName}' moet kleiner zijn dan of gelijk zijn aan '{ComparisonValue}'."),
    ("LessThanValidator", "'{PropertyName}' moet kleiner zijn dan '{ComparisonValue}'."),
    ("NotEmptyValidator", "'{PropertyName}' mag niet leeg zijn."),
    ("NotEqualValidator", "'{PropertyName}' moet anders zijn dan '{ComparisonValue}'."),
    ("NotNullValidator", "'{PropertyName}' mag niet leeg zijn."),
    ("PredicateValidator", "'{PropertyName}' voldoet niet aan de vereisten."),
    ("AsyncPredicateValidator", "'{PropertyName}' voldoet niet aan de vereisten."),
    ("RegularExpressionValidator", "'{PropertyName}' voldoet niet aan het verwachte formaat."),
    ("EqualValidator", "'{PropertyName}' moet gelijk zijn aan '{ComparisonValue}'."),
    ("ExactLengthValidator", "'{PropertyName}' moet {MaxLength} karakters lang zijn. Er zijn {TotalLength} karakters ingevoerd."),
    ("InclusiveBetweenValidator", "'{PropertyName}' moet tussen {From} en {To} liggen. U hebt {PropertyValue} ingevuld."),
    ("ExclusiveBetweenValidator", "'{PropertyName}' moet na {From} komen en voor {To} liggen. U hebt {PropertyValue} ingevuld."),
    ("CreditCardValidator", "'{PropertyName}' is geen geldig credit card nummer."),
    ("ScalePrecisionValidator", "'{PropertyName}' mag in totaal niet meer dan {ExpectedPrecision} cijfers bevatten, waarvan {ExpectedScale} decimalen. Er zijn {Digits} cijfers en {ActualScale} decimalen gevonden."),
    ("EmptyValidator", "'{PropertyName}' hoort leeg te zijn."),
    ("NullValidator", "'{PropertyName}' moet leeg zijn."),
    ("EnumValidator", "'{PropertyName}' heeft een bereik van waarden dat '{PropertyValue}' niet bevat."),
    ("Length_Simple", "'{PropertyName}' moet tussen {MinLength} en {MaxLength} karakters zijn."),
    ("MinimumLength_Simple", "'{PropertyName}' moet groter zijn dan of gelijk zijn aan {MinLength} karakters."),
    ("MaximumLength_Simple", "'{PropertyName}' moet kleiner zijn dan of gelijk zijn aan {MaxLength} karakters."),
    ("ExactLength_Simple", "'{PropertyName}' moet {MaxLength} karakters lang zijn."),
    ("InclusiveBetween_Unclamped", "'{PropertyName}' moet tussen {From} en {To} liggen."),
];

const PORTUGUESE: Table = &[
    ("EmailValidator", "'{PropertyName}' é um endereço de email inválido."),
    ("GreaterThanOrEqualValidator", "'{PropertyName}' deve ser superior ou igual a '{ComparisonValue}'."),
    ("GreaterThanValidator", "'{PropertyName}' deve ser superior a '{ComparisonValue}'."),
    ("LengthValidator", "'{PropertyName}' deve ter entre {MinLength} e {MaxLength} caracteres. Introduziu {TotalLength} caracteres."),
    ("MinimumLengthValidator", "'{PropertyName}' deve ter no mínimo {MinLength} caracteres. Introduziu {TotalLength} caracteres."),
    ("MaximumLengthValidator", "'{PropertyName}' deve ter no máximo {MaxLength} caracteres. Introduziu {TotalLength} caracteres."),
    ("LessThanOrEqualValidator", "'{PropertyName}' deve ser inferior ou igual a '{ComparisonValue}'."),
    ("LessThanValidator", "'{PropertyName}' deve ser inferior a '{ComparisonValue}'."),
    ("NotEmptyValidator", "'{PropertyName}' deve ser definido."),
    ("NotEqualValidator", "'{PropertyName}' deve ser diferente de '{ComparisonValue}'."),
    ("NotNullValidator", "'{PropertyName}' não pode ser nulo."),
    ("PredicateValidator", "A condição especificada não foi satisfeita por '{PropertyName}'."),
    ("AsyncPredicateValidator", "A condição especificada não foi satisfeita por '{PropertyName}'."),
    ("RegularExpressionValidator", "'{PropertyName}' não se encontra no formato correto."),
    ("EqualValidator", "'{PropertyName}' deve ser igual a '{ComparisonValue}'."),
    ("ExactLengthValidator", "'{PropertyName}' deve ter exatamente {MaxLength} caracteres. Introduziu {TotalLength} caracteres."),
    ("InclusiveBetweenValidator", "'{PropertyName}' deve estar entre {From} e {To}. Introduziu {PropertyValue}."),
    ("ExclusiveBetweenValidator", "'{PropertyName}' deve estar entre {From} e {To} (exclusivo). Introduziu {PropertyValue}."),
    ("CreditCardValidator", "'{PropertyName}' não é um número de cartão de crédito válido."),
    ("ScalePrecisionValidator", "'{PropertyName}' não pode ter mais do que {ExpectedPrecision} dígitos no total, com {ExpectedScale} casas decimais. Foram encontrados {Digits} dígitos e {ActualScale} casas decimais."),
    ("EmptyValidator", "'{PropertyName}' deve estar vazio."),
    ("NullValidator", "'{PropertyName}' deve estar nulo."),
    ("EnumValidator", "'{PropertyName}' possui um intervalo de valores que não inclui '{PropertyValue}'."),
    ("Length_Simple", "'{PropertyName}' deve ter entre {MinLength} e {MaxLength} caracteres."),
    ("MinimumLength_Simple", "'{PropertyName}' deve ter no mínimo {MinLength} caracteres."),
    ("MaximumLength_Simple", "'{PropertyName}' deve ter no máximo {MaxLength} caracteres."),
    ("ExactLength_Simple", "'{PropertyName}' deve ter exatamente {MaxLength} caracteres."),
    ("InclusiveBetween_Unclamped", "'{PropertyName}' deve estar entre {From} e {To}."),
];

const BRAZILIAN_PORTUGUESE: Table = &[
    ("EmailValidator", "'{PropertyName}' é um endereço de e-mail inválido."),
    ("GreaterThanOrEqualValidator", "'{PropertyName}' deve ser superior ou igual a '{ComparisonValue}'."),
    ("GreaterThanValidator", "'{PropertyName}' deve ser superior a '{ComparisonValue}'."),
    ("LengthValidator", "'{PropertyName}' deve ter entre {MinLength} e {MaxLength} caracteres. Você digitou {TotalLength} caracteres."),
    ("MinimumLengthValidator", "'{PropertyName}' deve ter no mínimo {MinLength} caracteres. Você digitou {TotalLength} caracteres."),
    ("MaximumLengthValidator", "'{PropertyName}' deve ter no máximo {MaxLength} caracteres. Você digitou {TotalLength} caracteres."),
    ("LessThanOrEqualValidator", "'{PropertyName}' deve ser inferior ou igual a '{ComparisonValue}'."),
    ("LessThanValidator", "'{PropertyName}' deve ser inferior a '{ComparisonValue}'."),
    ("NotEmptyValidator", "'{PropertyName}' deve ser informado."),
    ("NotEqualValidator", "'{PropertyName}' deve ser diferente de '{ComparisonValue}'."),
    ("NotNullValidator", "'{PropertyName}' não pode ser nulo."),
    ("PredicateValidator", "'{PropertyName}' não atende a condição especificada."),
    ("AsyncPredicateValidator", "'{PropertyName}' não atende a condição especificada."),
    ("RegularExpressionValidator", "'{PropertyName}' não está no formato correto."),
    ("EqualValidator", "'{PropertyName}' deve ser igual a '{ComparisonValue}'."),
    ("ExactLengthValidator", "'{PropertyName}' deve ter exatamente {MaxLength} caracteres. Você digitou {TotalLength} caracteres."),
    ("InclusiveBetweenValidator", "'{PropertyName}' deve estar entre {From} e {To}. Você digitou {PropertyValue}."),
    ("ExclusiveBetweenValidator", "'{PropertyName}' deve estar entre {From} e {To} (exclusivo). Você digitou {PropertyValue}."),
    ("CreditCardValidator", "'{PropertyName}' não é um número de cartão de crédito válido."),
    ("ScalePrecisionValidator", "'{PropertyName}' não pode ter mais do que {ExpectedPrecision} dígitos no total, com {ExpectedScale} casas decimais. Foram encontrados {Digits} dígitos e {ActualScale} casas decimais."),
    ("EmptyValidator", "'{PropertyName}' deve estar vazio."),
    ("NullValidator", "'{PropertyName}' deve ser nulo."),
    ("EnumValidator", "'{PropertyName}' possui um intervalo de valores que não inclui '{PropertyValue}'."),
    ("Length_Simple", "'{PropertyName}' deve ter entre {MinLength} e {MaxLength} caracteres."),
    ("MinimumLength_Simple", "'{PropertyName}' deve ter no mínimo {MinLength} caracteres."),
    ("MaximumLength_Simple", "'{PropertyName}' deve ter no máximo {MaxLength} caracteres."),
    ("ExactLength_Simple", "'{PropertyName}' deve ter exatamente {MaxLength} caracteres."),
    ("InclusiveBetween_Unclamped", "'{PropertyName}' deve estar entre {From} e {To}."),
];

const RUSSIAN: Table = &[
    ("EmailValidator", "'{PropertyName}' неверный email адрес."),
    ("GreaterThanOrEqualValidator", "'{PropertyName}' должно быть больше или равно '{ComparisonValue}'."),
    ("GreaterThanValidator", "'{PropertyName}' должно быть больше '{ComparisonValue}'."),
    ("LengthValidator", "'{PropertyName}' должно быть длиной от {MinLength} до {MaxLength} символов. Количество введенных символов: {TotalLength}."),
    ("MinimumLengthValidator", "'{PropertyName}' должно быть длиной не менее {MinLength} символов. Количество введенных символов: {TotalLength}."),
    ("MaximumLengthValidator", "'{PropertyName}' должно быть длиной не более {MaxLength} символов. Количество введенных символов: {TotalLength}."),
    ("LessThanOrEqualValidator", "'{PropertyName}' должно быть меньше или равно '{ComparisonValue}'."),
    ("LessThanValidator", "'{PropertyName}' должно быть меньше '{ComparisonValue}'."),
    ("NotEmptyValidator", "'{PropertyName}' должно быть заполнено."),
    ("NotEqualValidator", "'{PropertyName}' не должно быть равно '{ComparisonValue}'."),
    ("NotNullValidator", "'{PropertyName}' должно быть заполнено."),
    ("PredicateValidator", "Указанное условие не было выполнено для '{PropertyName}'."),
    ("AsyncPredicateValidator", "Указанное условие не было выполнено для '{PropertyName}'."),
    ("RegularExpressionValidator", "'{PropertyName}' имеет неверный формат."),
    ("EqualValidator", "'{PropertyName}' должно быть равно '{ComparisonValue}'."),
    ("ExactLengthValidator", "'{PropertyName}' должно быть длиной {MaxLength} символа(ов). Количество введенных символов: {TotalLength}."),
    ("InclusiveBetweenValidator", "'{PropertyName}' должно быть в диапазоне от {From} до {To}. Введенное значение: {PropertyValue}."),
    ("ExclusiveBetweenValidator", "'{PropertyName}' должно быть в диапазоне от {From} до {To} (не включая эти значения). Введенное значение: {PropertyValue}."),
    ("CreditCardValidator", "'{PropertyName}' неверный номер карты."),
    ("ScalePrecisionValidator", "'{PropertyName}' должно содержать не более {ExpectedPrecision} цифр всего, в том числе {ExpectedScale} десятичных знака(ов). Введенное значение содержит {Digits} цифр(ы) в целой части и {ActualScale} десятичных знака(ов)."),
    ("EmptyValidator", "'{PropertyName}' должно быть пустым."),
    ("NullValidator", "'{PropertyName}' должно быть пустым."),
    ("EnumValidator", "'{PropertyName}' содержит недопустимое значение '{PropertyValue}'."),
    ("Length_Simple", "'{PropertyName}' должно быть длиной от {MinLength} до {MaxLength} символов."),
    ("MinimumLength_Simple", "'{PropertyName}' должно быть длиной не менее {MinLength} символов."),
    ("MaximumLength_Simple", "'{PropertyName}' должно быть длиной не более {MaxLength} символов."),
    ("ExactLength_Simple", "'{PropertyName}' должно быть длиной {MaxLength} символа(ов)."),
    ("InclusiveBetween_Unclamped", "'{PropertyName}' должно быть в диапазоне от {From} до {To}."),
];
