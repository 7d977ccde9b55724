//! Built-in GLSL ES 3.0 table (keywords from section 3.6 of the language
//! specification, plus the WebGL 2 built-in functions).

use shade_lexer_core::{SymbolClass, SymbolTable};

use crate::{LanguageTable, WordCategory, WordEntry};

const PRE_PROCESS: &[(&str, u8)] = &[
    ("#ifdef", 1),
    ("#ifndef", 1),
    ("#if", 1),
    ("#elif", 1),
    ("#else", 1),
    ("#endif", 1),
    ("#define", 1),
    ("#undef", 1),
    ("#pragma", 2),
    ("#line", 2),
    ("#error", 2),
    ("#version", 2),
];

const RESERVED: &[(&str, u8)] = &[
    ("define", 1),
    ("precision", 1),
    ("varying", 1),
    ("uniform", 1),
    ("layout", 1),
    ("highp", 1),
    ("mediump", 1),
    ("lowp", 1),
    ("if", 3),
    ("else", 3),
    ("do", 3),
    ("for", 3),
    ("while", 3),
    ("break", 3),
    ("continue", 4),
    ("return", 4),
    ("discard", 4),
    ("switch", 5),
    ("case", 5),
    ("default", 5),
    ("invariant", 6),
    ("centroid", 6),
    ("flat", 6),
    ("smooth", 6),
    ("const", 2),
    ("in", 2),
    ("out", 2),
    ("inout", 2),
    ("void", 10),
];

const RESERVED_TYPE: &[(&str, u8)] = &[
    ("struct", 10),
    ("float", 10),
    ("int", 10),
    ("uint", 10),
    ("bool", 10),
];

const CONST: &[(&str, u8)] = &[("true", 1), ("false", 1)];

const TYPE: &[(&str, u8)] = &[
    ("vec2", 3),
    ("vec3", 3),
    ("vec4", 3),
    ("bvec2", 3),
    ("bvec3", 3),
    ("bvec4", 3),
    ("ivec2", 3),
    ("ivec3", 3),
    ("ivec4", 3),
    ("uvec2", 3),
    ("uvec3", 3),
    ("uvec4", 3),
    ("mat2", 4),
    ("mat3", 4),
    ("mat4", 4),
    ("mat2x2", 5),
    ("mat2x3", 5),
    ("mat2x4", 5),
    ("mat3x2", 5),
    ("mat3x3", 5),
    ("mat3x4", 5),
    ("mat4x2", 5),
    ("mat4x3", 5),
    ("mat4x4", 5),
    ("sampler1D", 6),
    ("sampler2D", 6),
    ("sampler3D", 6),
    ("samplerCube", 6),
    ("sampler2DRect", 6),
    ("sampler1DArray", 6),
    ("sampler2DArray", 6),
    ("samplerCubeArray", 6),
    ("sampler2DMS", 6),
    ("sampler2DMSArray", 6),
];

const FUNCTION: &[(&str, u8)] = &[
    ("isampler2D", 1),
    ("isampler3D", 1),
    ("isamplerCube", 1),
    ("isampler2DArray", 1),
    ("radians", 2),
    ("degrees", 2),
    ("sin", 2),
    ("cos", 2),
    ("tan", 2),
    ("asin", 2),
    ("acos", 2),
    ("atan", 2),
    ("sinh", 2),
    ("cosh", 2),
    ("tanh", 2),
    ("asinh", 2),
    ("acosh", 2),
    ("atanh", 2),
    ("pow", 3),
    ("exp", 3),
    ("log", 3),
    ("exp2", 3),
    ("log2", 3),
    ("sqrt", 3),
    ("inversesqrt", 3),
    ("abs", 4),
    ("sign", 4),
    ("floor", 4),
    ("trunc", 4),
    ("round", 4),
    ("roundEven", 4),
    ("ceil", 4),
    ("fract", 4),
    ("mod", 5),
    ("modf", 5),
    ("min", 5),
    ("max", 5),
    ("clamp", 5),
    ("mix", 5),
    ("step", 5),
    ("smoothstep", 5),
    ("isnan", 5),
    ("isinf", 5),
    ("length", 6),
    ("distance", 6),
    ("dot", 6),
    ("cross", 6),
    ("normalize", 6),
    ("faceforward", 6),
    ("reflect", 6),
    ("refract", 6),
    ("floatBitsToInt", 7),
    ("floatBitsToUInt", 7),
    ("intBitsToFloat", 7),
    ("uintBitsToFloat", 7),
    ("packSnorm2x16", 7),
    ("unpackSnorm2x16", 7),
    ("packUnorm2x16", 7),
    ("unpackUnorm2x16", 7),
    ("packHalf2x16", 7),
    ("unpackHalf2x16", 7),
    ("matrixCompMult", 8),
    ("outerProduct", 8),
    ("transpose", 8),
    ("determinant", 8),
    ("inverse", 8),
    ("lessThan", 9),
    ("lessThanEqual", 9),
    ("greaterThan", 9),
    ("greaterThanEqual", 9),
    ("equal", 9),
    ("notEqual", 9),
    ("any", 9),
    ("all", 9),
    ("not", 9),
    ("textureSize", 10),
    ("texture", 10),
    ("textureProj", 10),
    ("textureLod", 10),
    ("textureOffset", 10),
    ("texelFetch", 10),
    ("texelFetchOffset", 10),
    ("textureProjOffset", 10),
    ("textureLodOffset", 10),
    ("textureProjLod", 10),
    ("textureProjLodOffset", 10),
    ("textureGrad", 10),
    ("textureGradOffset", 10),
    ("textureProjGrad", 10),
    ("textureProjGradOffset", 10),
    ("dFdx", 11),
    ("dFdy", 11),
    ("fwidth", 11),
];

const OTHER: &[&str] = &[
    "attribute",
    "coherent",
    "volatile",
    "restrict",
    "readonly",
    "writeonly",
    "resource",
    "atomic_uint",
    "noperspective",
    "patch",
    "sample",
    "subroutine",
    "common",
    "partition",
    "active",
    "asm",
    "class",
    "union",
    "enum",
    "typedef",
    "template",
    "this",
    "goto",
    "inline",
    "noinline",
    "public",
    "static",
    "extern",
    "external",
    "interface",
    "long",
    "short",
    "double",
    "half",
    "fixed",
    "unsigned",
    "superp",
    "input",
    "output",
    "hvec2",
    "hvec3",
    "hvec4",
    "dvec2",
    "dvec3",
    "dvec4",
    "fvec2",
    "fvec3",
    "fvec4",
    "sampler3DRect",
    "filter",
    "image1D",
    "image2D",
    "image3D",
    "imageCube",
    "iimage1D",
    "iimage2D",
    "iimage3D",
    "iimageCube",
    "uimage1D",
    "uimage2D",
    "uimage3D",
    "uimageCube",
    "image1DArray",
    "image2DArray",
    "iimage1DArray",
    "iimage2DArray",
    "uimage1DArray",
    "uimage2DArray",
    "image1DShadow",
    "image2DShadow",
    "image1DArrayShadow",
    "image2DArrayShadow",
    "imageBuffer",
    "iimageBuffer",
    "uimageBuffer",
    "sampler1D",
    "sampler1DShadow",
    "sampler1DArray",
    "sampler1DArrayShadow",
    "isampler1D",
    "isampler1DArray",
    "usampler1D",
    "usampler1DArray",
    "sampler2DRect",
    "sampler2DRectShadow",
    "isampler2DRect",
    "usampler2DRect",
    "samplerBuffer",
    "isamplerBuffer",
    "usamplerBuffer",
    "sampler2DMS",
    "isampler2DMS",
    "usampler2DMS",
    "sampler2DMSArray",
    "isampler2DMSArray",
    "usampler2DMSArray",
    "sizeof",
    "cast",
    "namespace",
    "using",
];

const SYMBOLS: &[(&str, SymbolClass)] = &[
    (";", SymbolClass::Terminator),
    (",", SymbolClass::Separator),
    ("(", SymbolClass::Open),
    (")", SymbolClass::Close),
    ("{", SymbolClass::Open),
    ("}", SymbolClass::Close),
    ("[", SymbolClass::Open),
    ("]", SymbolClass::Close),
    ("*", SymbolClass::Arithmetic),
    ("+", SymbolClass::Arithmetic),
    ("-", SymbolClass::Arithmetic),
    ("++", SymbolClass::Arithmetic),
    ("--", SymbolClass::Arithmetic),
    ("/", SymbolClass::Arithmetic),
    ("%", SymbolClass::Arithmetic),
    ("!", SymbolClass::Arithmetic),
    ("=", SymbolClass::Assign),
    ("+=", SymbolClass::Assign),
    ("-=", SymbolClass::Assign),
    ("*=", SymbolClass::Assign),
    ("/=", SymbolClass::Assign),
    ("&&", SymbolClass::Compare),
    ("||", SymbolClass::Compare),
    ("==", SymbolClass::Compare),
    ("!=", SymbolClass::Compare),
    (">=", SymbolClass::Compare),
    ("<=", SymbolClass::Compare),
    (">", SymbolClass::Compare),
    ("<", SymbolClass::Compare),
    ("~", SymbolClass::Compare),
    ("?", SymbolClass::Compare),
    (":", SymbolClass::Compare),
    ("&", SymbolClass::Bitwise),
    ("|", SymbolClass::Bitwise),
    ("^", SymbolClass::Bitwise),
    (">>", SymbolClass::Bitwise),
    ("<<", SymbolClass::Bitwise),
    ("/*", SymbolClass::CommentMarker),
    ("*/", SymbolClass::CommentMarker),
    ("//", SymbolClass::CommentMarker),
    (".", SymbolClass::Dot),
];

const CONTROL_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "do", "switch", "case", "return",
];

pub(crate) fn table() -> LanguageTable {
    let symbols: SymbolTable = SYMBOLS.iter().copied().collect();
    let mut table = LanguageTable::from_parts(symbols);

    let groups: [(WordCategory, &[(&str, u8)]); 6] = [
        (WordCategory::PreProcess, PRE_PROCESS),
        (WordCategory::Reserved, RESERVED),
        (WordCategory::ReservedType, RESERVED_TYPE),
        (WordCategory::Const, CONST),
        (WordCategory::Type, TYPE),
        (WordCategory::Function, FUNCTION),
    ];
    for (category, words) in groups {
        for &(word, rank) in words {
            table.insert_word(word, WordEntry { category, rank });
        }
    }
    // Applied last, so sampler names listed under both `type` and `other`
    // end up as `other`.
    for word in OTHER {
        table.insert_word(
            word,
            WordEntry {
                category: WordCategory::Other,
                rank: 1,
            },
        );
    }
    for word in CONTROL_KEYWORDS {
        table.insert_control(word);
    }
    table
}
