// Generated by gen_properties from SentenceBreakProperty.txt.
// Unicode text segmentation property dictionary; do not edit by hand.

use crate::properties::SentenceProperty::{self, *};
use crate::properties::Dictionary;

pub(crate) static SENTENCE_BREAK: Dictionary<SentenceProperty> = Dictionary(&[
    (0x0009, 0x0009, Sp),
    (0x000A, 0x000A, Lf),
    (0x000B, 0x000C, Sp),
    (0x000D, 0x000D, Cr),
    (0x0020, 0x0020, Sp),
    (0x0021, 0x0021, STerm),
    (0x0022, 0x0022, Close),
    (0x0027, 0x0029, Close),
    (0x002C, 0x002D, SContinue),
    (0x002E, 0x002E, ATerm),
    (0x0030, 0x0039, Numeric),
    (0x003A, 0x003B, SContinue),
    (0x003F, 0x003F, STerm),
    (0x0041, 0x005A, Upper),
    (0x005B, 0x005B, Close),
    (0x005D, 0x005D, Close),
    (0x0061, 0x007A, Lower),
    (0x007B, 0x007B, Close),
    (0x007D, 0x007D, Close),
    (0x0085, 0x0085, Sep),
    (0x00A0, 0x00A0, Sp),
    (0x00AA, 0x00AA, Lower),
    (0x00AB, 0x00AB, Close),
    (0x00AD, 0x00AD, Format),
    (0x00B5, 0x00B5, Lower),
    (0x00BA, 0x00BA, Lower),
    (0x00BB, 0x00BB, Close),
    (0x00C0, 0x00D6, Upper),
    (0x00D8, 0x00DE, Upper),
    (0x00DF, 0x00F6, Lower),
    (0x00F8, 0x00FF, Lower),
    (0x0100, 0x0100, Upper),
    (0x0101, 0x0101, Lower),
    (0x0102, 0x0102, Upper),
    (0x0103, 0x0103, Lower),
    (0x0104, 0x0104, Upper),
    (0x0105, 0x0105, Lower),
    (0x0106, 0x0106, Upper),
    (0x0107, 0x0107, Lower),
    (0x0108, 0x0108, Upper),
    (0x0109, 0x0109, Lower),
    (0x010A, 0x010A, Upper),
    (0x010B, 0x010B, Lower),
    (0x010C, 0x010C, Upper),
    (0x010D, 0x010D, Lower),
    (0x010E, 0x010E, Upper),
    (0x010F, 0x010F, Lower),
    (0x0110, 0x0110, Upper),
    (0x0111, 0x0111, Lower),
    (0x0112, 0x0112, Upper),
    (0x0113, 0x0113, Lower),
    (0x0114, 0x0114, Upper),
    (0x0115, 0x0115, Lower),
    (0x0116, 0x0116, Upper),
    (0x0117, 0x0117, Lower),
    (0x0118, 0x0118, Upper),
    (0x0119, 0x0119, Lower),
    (0x011A, 0x011A, Upper),
    (0x011B, 0x011B, Lower),
    (0x011C, 0x011C, Upper),
    (0x011D, 0x011D, Lower),
    (0x011E, 0x011E, Upper),
    (0x011F, 0x011F, Lower),
    (0x0120, 0x0120, Upper),
    (0x0121, 0x0121, Lower),
    (0x0122, 0x0122, Upper),
    (0x0123, 0x0123, Lower),
    (0x0124, 0x0124, Upper),
    (0x0125, 0x0125, Lower),
    (0x0126, 0x0126, Upper),
    (0x0127, 0x0127, Lower),
    (0x0128, 0x0128, Upper),
    (0x0129, 0x0129, Lower),
    (0x012A, 0x012A, Upper),
    (0x012B, 0x012B, Lower),
    (0x012C, 0x012C, Upper),
    (0x012D, 0x012D, Lower),
    (0x012E, 0x012E, Upper),
    (0x012F, 0x012F, Lower),
    (0x0130, 0x0130, Upper),
    (0x0131, 0x0131, Lower),
    (0x0132, 0x0132, Upper),
    (0x0133, 0x0133, Lower),
    (0x0134, 0x0134, Upper),
    (0x0135, 0x0135, Lower),
    (0x0136, 0x0136, Upper),
    (0x0137, 0x0138, Lower),
    (0x0139, 0x0139, Upper),
    (0x013A, 0x013A, Lower),
    (0x013B, 0x013B, Upper),
    (0x013C, 0x013C, Lower),
    (0x013D, 0x013D, Upper),
    (0x013E, 0x013E, Lower),
    (0x013F, 0x013F, Upper),
    (0x0140, 0x0140, Lower),
    (0x0141, 0x0141, Upper),
    (0x0142, 0x0142, Lower),
    (0x0143, 0x0143, Upper),
    (0x0144, 0x0144, Lower),
    (0x0145, 0x0145, Upper),
    (0x0146, 0x0146, Lower),
    (0x0147, 0x0147, Upper),
    (0x0148, 0x0149, Lower),
    (0x014A, 0x014A, Upper),
    (0x014B, 0x014B, Lower),
    (0x014C, 0x014C, Upper),
    (0x014D, 0x014D, Lower),
    (0x014E, 0x014E, Upper),
    (0x014F, 0x014F, Lower),
    (0x0150, 0x0150, Upper),
    (0x0151, 0x0151, Lower),
    (0x0152, 0x0152, Upper),
    (0x0153, 0x0153, Lower),
    (0x0154, 0x0154, Upper),
    (0x0155, 0x0155, Lower),
    (0x0156, 0x0156, Upper),
    (0x0157, 0x0157, Lower),
    (0x0158, 0x0158, Upper),
    (0x0159, 0x0159, Lower),
    (0x015A, 0x015A, Upper),
    (0x015B, 0x015B, Lower),
    (0x015C, 0x015C, Upper),
    (0x015D, 0x015D, Lower),
    (0x015E, 0x015E, Upper),
    (0x015F, 0x015F, Lower),
    (0x0160, 0x0160, Upper),
    (0x0161, 0x0161, Lower),
    (0x0162, 0x0162, Upper),
    (0x0163, 0x0163, Lower),
    (0x0164, 0x0164, Upper),
    (0x0165, 0x0165, Lower),
    (0x0166, 0x0166, Upper),
    (0x0167, 0x0167, Lower),
    (0x0168, 0x0168, Upper),
    (0x0169, 0x0169, Lower),
    (0x016A, 0x016A, Upper),
    (0x016B, 0x016B, Lower),
    (0x016C, 0x016C, Upper),
    (0x016D, 0x016D, Lower),
    (0x016E, 0x016E, Upper),
    (0x016F, 0x016F, Lower),
    (0x0170, 0x0170, Upper),
    (0x0171, 0x0171, Lower),
    (0x0172, 0x0172, Upper),
    (0x0173, 0x0173, Lower),
    (0x0174, 0x0174, Upper),
    (0x0175, 0x0175, Lower),
    (0x0176, 0x0176, Upper),
    (0x0177, 0x0177, Lower),
    (0x0178, 0x0179, Upper),
    (0x017A, 0x017A, Lower),
    (0x017B, 0x017B, Upper),
    (0x017C, 0x017C, Lower),
    (0x017D, 0x017D, Upper),
    (0x017E, 0x0180, Lower),
    (0x0181, 0x0182, Upper),
    (0x0183, 0x0183, Lower),
    (0x0184, 0x0184, Upper),
    (0x0185, 0x0185, Lower),
    (0x0186, 0x0187, Upper),
    (0x0188, 0x0188, Lower),
    (0x0189, 0x018B, Upper),
    (0x018C, 0x018D, Lower),
    (0x018E, 0x0191, Upper),
    (0x0192, 0x0192, Lower),
    (0x0193, 0x0194, Upper),
    (0x0195, 0x0195, Lower),
    (0x0196, 0x0198, Upper),
    (0x0199, 0x019B, Lower),
    (0x019C, 0x019D, Upper),
    (0x019E, 0x019E, Lower),
    (0x019F, 0x01A0, Upper),
    (0x01A1, 0x01A1, Lower),
    (0x01A2, 0x01A2, Upper),
    (0x01A3, 0x01A3, Lower),
    (0x01A4, 0x01A4, Upper),
    (0x01A5, 0x01A5, Lower),
    (0x01A6, 0x01A7, Upper),
    (0x01A8, 0x01A8, Lower),
    (0x01A9, 0x01A9, Upper),
    (0x01AA, 0x01AB, Lower),
    (0x01AC, 0x01AC, Upper),
    (0x01AD, 0x01AD, Lower),
    (0x01AE, 0x01AF, Upper),
    (0x01B0, 0x01B0, Lower),
    (0x01B1, 0x01B3, Upper),
    (0x01B4, 0x01B4, Lower),
    (0x01B5, 0x01B5, Upper),
    (0x01B6, 0x01B6, Lower),
    (0x01B7, 0x01B8, Upper),
    (0x01B9, 0x01BA, Lower),
    (0x01BB, 0x01BB, OLetter),
    (0x01BC, 0x01BC, Upper),
    (0x01BD, 0x01BF, Lower),
    (0x01C0, 0x01C3, OLetter),
    (0x01C4, 0x01C5, Upper),
    (0x01C6, 0x01C6, Lower),
    (0x01C7, 0x01C8, Upper),
    (0x01C9, 0x01C9, Lower),
    (0x01CA, 0x01CB, Upper),
    (0x01CC, 0x01CC, Lower),
    (0x01CD, 0x01CD, Upper),
    (0x01CE, 0x01CE, Lower),
    (0x01CF, 0x01CF, Upper),
    (0x01D0, 0x01D0, Lower),
    (0x01D1, 0x01D1, Upper),
    (0x01D2, 0x01D2, Lower),
    (0x01D3, 0x01D3, Upper),
    (0x01D4, 0x01D4, Lower),
    (0x01D5, 0x01D5, Upper),
    (0x01D6, 0x01D6, Lower),
    (0x01D7, 0x01D7, Upper),
    (0x01D8, 0x01D8, Lower),
    (0x01D9, 0x01D9, Upper),
    (0x01DA, 0x01DA, Lower),
    (0x01DB, 0x01DB, Upper),
    (0x01DC, 0x01DD, Lower),
    (0x01DE, 0x01DE, Upper),
    (0x01DF, 0x01DF, Lower),
    (0x01E0, 0x01E0, Upper),
    (0x01E1, 0x01E1, Lower),
    (0x01E2, 0x01E2, Upper),
    (0x01E3, 0x01E3, Lower),
    (0x01E4, 0x01E4, Upper),
    (0x01E5, 0x01E5, Lower),
    (0x01E6, 0x01E6, Upper),
    (0x01E7, 0x01E7, Lower),
    (0x01E8, 0x01E8, Upper),
    (0x01E9, 0x01E9, Lower),
    (0x01EA, 0x01EA, Upper),
    (0x01EB, 0x01EB, Lower),
    (0x01EC, 0x01EC, Upper),
    (0x01ED, 0x01ED, Lower),
    (0x01EE, 0x01EE, Upper),
    (0x01EF, 0x01F0, Lower),
    (0x01F1, 0x01F2, Upper),
    (0x01F3, 0x01F3, Lower),
    (0x01F4, 0x01F4, Upper),
    (0x01F5, 0x01F5, Lower),
    (0x01F6, 0x01F8, Upper),
    (0x01F9, 0x01F9, Lower),
    (0x01FA, 0x01FA, Upper),
    (0x01FB, 0x01FB, Lower),
    (0x01FC, 0x01FC, Upper),
    (0x01FD, 0x01FD, Lower),
    (0x01FE, 0x01FE, Upper),
    (0x01FF, 0x01FF, Lower),
    (0x0200, 0x0200, Upper),
    (0x0201, 0x0201, Lower),
    (0x0202, 0x0202, Upper),
    (0x0203, 0x0203, Lower),
    (0x0204, 0x0204, Upper),
    (0x0205, 0x0205, Lower),
    (0x0206, 0x0206, Upper),
    (0x0207, 0x0207, Lower),
    (0x0208, 0x0208, Upper),
    (0x0209, 0x0209, Lower),
    (0x020A, 0x020A, Upper),
    (0x020B, 0x020B, Lower),
    (0x020C, 0x020C, Upper),
    (0x020D, 0x020D, Lower),
    (0x020E, 0x020E, Upper),
    (0x020F, 0x020F, Lower),
    (0x0210, 0x0210, Upper),
    (0x0211, 0x0211, Lower),
    (0x0212, 0x0212, Upper),
    (0x0213, 0x0213, Lower),
    (0x0214, 0x0214, Upper),
    (0x0215, 0x0215, Lower),
    (0x0216, 0x0216, Upper),
    (0x0217, 0x0217, Lower),
    (0x0218, 0x0218, Upper),
    (0x0219, 0x0219, Lower),
    (0x021A, 0x021A, Upper),
    (0x021B, 0x021B, Lower),
    (0x021C, 0x021C, Upper),
    (0x021D, 0x021D, Lower),
    (0x021E, 0x021E, Upper),
    (0x021F, 0x021F, Lower),
    (0x0220, 0x0220, Upper),
    (0x0221, 0x0221, Lower),
    (0x0222, 0x0222, Upper),
    (0x0223, 0x0223, Lower),
    (0x0224, 0x0224, Upper),
    (0x0225, 0x0225, Lower),
    (0x0226, 0x0226, Upper),
    (0x0227, 0x0227, Lower),
    (0x0228, 0x0228, Upper),
    (0x0229, 0x0229, Lower),
    (0x022A, 0x022A, Upper),
    (0x022B, 0x022B, Lower),
    (0x022C, 0x022C, Upper),
    (0x022D, 0x022D, Lower),
    (0x022E, 0x022E, Upper),
    (0x022F, 0x022F, Lower),
    (0x0230, 0x0230, Upper),
    (0x0231, 0x0231, Lower),
    (0x0232, 0x0232, Upper),
    (0x0233, 0x0239, Lower),
    (0x023A, 0x023B, Upper),
    (0x023C, 0x023C, Lower),
    (0x023D, 0x023E, Upper),
    (0x023F, 0x0240, Lower),
    (0x0241, 0x0241, Upper),
    (0x0242, 0x0242, Lower),
    (0x0243, 0x0246, Upper),
    (0x0247, 0x0247, Lower),
    (0x0248, 0x0248, Upper),
    (0x0249, 0x0249, Lower),
    (0x024A, 0x024A, Upper),
    (0x024B, 0x024B, Lower),
    (0x024C, 0x024C, Upper),
    (0x024D, 0x024D, Lower),
    (0x024E, 0x024E, Upper),
    (0x024F, 0x0293, Lower),
    (0x0294, 0x0295, OLetter),
    (0x0296, 0x02B8, Lower),
    (0x02B9, 0x02BF, OLetter),
    (0x02C0, 0x02C1, Lower),
    (0x02C6, 0x02D1, OLetter),
    (0x02E0, 0x02E4, Lower),
    (0x02EC, 0x02EC, OLetter),
    (0x02EE, 0x02EE, OLetter),
    (0x0300, 0x036F, Extend),
    (0x0370, 0x0370, Upper),
    (0x0371, 0x0371, Lower),
    (0x0372, 0x0372, Upper),
    (0x0373, 0x0373, Lower),
    (0x0374, 0x0374, OLetter),
    (0x0376, 0x0376, Upper),
    (0x0377, 0x0377, Lower),
    (0x037A, 0x037D, Lower),
    (0x037E, 0x037E, SContinue),
    (0x037F, 0x037F, Upper),
    (0x0386, 0x0386, Upper),
    (0x0388, 0x038A, Upper),
    (0x038C, 0x038C, Upper),
    (0x038E, 0x038F, Upper),
    (0x0390, 0x0390, Lower),
    (0x0391, 0x03A1, Upper),
    (0x03A3, 0x03AB, Upper),
    (0x03AC, 0x03CE, Lower),
    (0x03CF, 0x03CF, Upper),
    (0x03D0, 0x03D1, Lower),
    (0x03D2, 0x03D4, Upper),
    (0x03D5, 0x03D7, Lower),
    (0x03D8, 0x03D8, Upper),
    (0x03D9, 0x03D9, Lower),
    (0x03DA, 0x03DA, Upper),
    (0x03DB, 0x03DB, Lower),
    (0x03DC, 0x03DC, Upper),
    (0x03DD, 0x03DD, Lower),
    (0x03DE, 0x03DE, Upper),
    (0x03DF, 0x03DF, Lower),
    (0x03E0, 0x03E0, Upper),
    (0x03E1, 0x03E1, Lower),
    (0x03E2, 0x03E2, Upper),
    (0x03E3, 0x03E3, Lower),
    (0x03E4, 0x03E4, Upper),
    (0x03E5, 0x03E5, Lower),
    (0x03E6, 0x03E6, Upper),
    (0x03E7, 0x03E7, Lower),
    (0x03E8, 0x03E8, Upper),
    (0x03E9, 0x03E9, Lower),
    (0x03EA, 0x03EA, Upper),
    (0x03EB, 0x03EB, Lower),
    (0x03EC, 0x03EC, Upper),
    (0x03ED, 0x03ED, Lower),
    (0x03EE, 0x03EE, Upper),
    (0x03EF, 0x03F3, Lower),
    (0x03F4, 0x03F4, Upper),
    (0x03F5, 0x03F5, Lower),
    (0x03F7, 0x03F7, Upper),
    (0x03F8, 0x03F8, Lower),
    (0x03F9, 0x03FA, Upper),
    (0x03FB, 0x03FC, Lower),
    (0x03FD, 0x042F, Upper),
    (0x0430, 0x045F, Lower),
    (0x0460, 0x0460, Upper),
    (0x0461, 0x0461, Lower),
    (0x0462, 0x0462, Upper),
    (0x0463, 0x0463, Lower),
    (0x0464, 0x0464, Upper),
    (0x0465, 0x0465, Lower),
    (0x0466, 0x0466, Upper),
    (0x0467, 0x0467, Lower),
    (0x0468, 0x0468, Upper),
    (0x0469, 0x0469, Lower),
    (0x046A, 0x046A, Upper),
    (0x046B, 0x046B, Lower),
    (0x046C, 0x046C, Upper),
    (0x046D, 0x046D, Lower),
    (0x046E, 0x046E, Upper),
    (0x046F, 0x046F, Lower),
    (0x0470, 0x0470, Upper),
    (0x0471, 0x0471, Lower),
    (0x0472, 0x0472, Upper),
    (0x0473, 0x0473, Lower),
    (0x0474, 0x0474, Upper),
    (0x0475, 0x0475, Lower),
    (0x0476, 0x0476, Upper),
    (0x0477, 0x0477, Lower),
    (0x0478, 0x0478, Upper),
    (0x0479, 0x0479, Lower),
    (0x047A, 0x047A, Upper),
    (0x047B, 0x047B, Lower),
    (0x047C, 0x047C, Upper),
    (0x047D, 0x047D, Lower),
    (0x047E, 0x047E, Upper),
    (0x047F, 0x047F, Lower),
    (0x0480, 0x0480, Upper),
    (0x0481, 0x0481, Lower),
    (0x0483, 0x0489, Extend),
    (0x048A, 0x048A, Upper),
    (0x048B, 0x048B, Lower),
    (0x048C, 0x048C, Upper),
    (0x048D, 0x048D, Lower),
    (0x048E, 0x048E, Upper),
    (0x048F, 0x048F, Lower),
    (0x0490, 0x0490, Upper),
    (0x0491, 0x0491, Lower),
    (0x0492, 0x0492, Upper),
    (0x0493, 0x0493, Lower),
    (0x0494, 0x0494, Upper),
    (0x0495, 0x0495, Lower),
    (0x0496, 0x0496, Upper),
    (0x0497, 0x0497, Lower),
    (0x0498, 0x0498, Upper),
    (0x0499, 0x0499, Lower),
    (0x049A, 0x049A, Upper),
    (0x049B, 0x049B, Lower),
    (0x049C, 0x049C, Upper),
    (0x049D, 0x049D, Lower),
    (0x049E, 0x049E, Upper),
    (0x049F, 0x049F, Lower),
    (0x04A0, 0x04A0, Upper),
    (0x04A1, 0x04A1, Lower),
    (0x04A2, 0x04A2, Upper),
    (0x04A3, 0x04A3, Lower),
    (0x04A4, 0x04A4, Upper),
    (0x04A5, 0x04A5, Lower),
    (0x04A6, 0x04A6, Upper),
    (0x04A7, 0x04A7, Lower),
    (0x04A8, 0x04A8, Upper),
    (0x04A9, 0x04A9, Lower),
    (0x04AA, 0x04AA, Upper),
    (0x04AB, 0x04AB, Lower),
    (0x04AC, 0x04AC, Upper),
    (0x04AD, 0x04AD, Lower),
    (0x04AE, 0x04AE, Upper),
    (0x04AF, 0x04AF, Lower),
    (0x04B0, 0x04B0, Upper),
    (0x04B1, 0x04B1, Lower),
    (0x04B2, 0x04B2, Upper),
    (0x04B3, 0x04B3, Lower),
    (0x04B4, 0x04B4, Upper),
    (0x04B5, 0x04B5, Lower),
    (0x04B6, 0x04B6, Upper),
    (0x04B7, 0x04B7, Lower),
    (0x04B8, 0x04B8, Upper),
    (0x04B9, 0x04B9, Lower),
    (0x04BA, 0x04BA, Upper),
    (0x04BB, 0x04BB, Lower),
    (0x04BC, 0x04BC, Upper),
    (0x04BD, 0x04BD, Lower),
    (0x04BE, 0x04BE, Upper),
    (0x04BF, 0x04BF, Lower),
    (0x04C0, 0x04C1, Upper),
    (0x04C2, 0x04C2, Lower),
    (0x04C3, 0x04C3, Upper),
    (0x04C4, 0x04C4, Lower),
    (0x04C5, 0x04C5, Upper),
    (0x04C6, 0x04C6, Lower),
    (0x04C7, 0x04C7, Upper),
    (0x04C8, 0x04C8, Lower),
    (0x04C9, 0x04C9, Upper),
    (0x04CA, 0x04CA, Lower),
    (0x04CB, 0x04CB, Upper),
    (0x04CC, 0x04CC, Lower),
    (0x04CD, 0x04CD, Upper),
    (0x04CE, 0x04CF, Lower),
    (0x04D0, 0x04D0, Upper),
    (0x04D1, 0x04D1, Lower),
    (0x04D2, 0x04D2, Upper),
    (0x04D3, 0x04D3, Lower),
    (0x04D4, 0x04D4, Upper),
    (0x04D5, 0x04D5, Lower),
    (0x04D6, 0x04D6, Upper),
    (0x04D7, 0x04D7, Lower),
    (0x04D8, 0x04D8, Upper),
    (0x04D9, 0x04D9, Lower),
    (0x04DA, 0x04DA, Upper),
    (0x04DB, 0x04DB, Lower),
    (0x04DC, 0x04DC, Upper),
    (0x04DD, 0x04DD, Lower),
    (0x04DE, 0x04DE, Upper),
    (0x04DF, 0x04DF, Lower),
    (0x04E0, 0x04E0, Upper),
    (0x04E1, 0x04E1, Lower),
    (0x04E2, 0x04E2, Upper),
    (0x04E3, 0x04E3, Lower),
    (0x04E4, 0x04E4, Upper),
    (0x04E5, 0x04E5, Lower),
    (0x04E6, 0x04E6, Upper),
    (0x04E7, 0x04E7, Lower),
    (0x04E8, 0x04E8, Upper),
    (0x04E9, 0x04E9, Lower),
    (0x04EA, 0x04EA, Upper),
    (0x04EB, 0x04EB, Lower),
    (0x04EC, 0x04EC, Upper),
    (0x04ED, 0x04ED, Lower),
    (0x04EE, 0x04EE, Upper),
    (0x04EF, 0x04EF, Lower),
    (0x04F0, 0x04F0, Upper),
    (0x04F1, 0x04F1, Lower),
    (0x04F2, 0x04F2, Upper),
    (0x04F3, 0x04F3, Lower),
    (0x04F4, 0x04F4, Upper),
    (0x04F5, 0x04F5, Lower),
    (0x04F6, 0x04F6, Upper),
    (0x04F7, 0x04F7, Lower),
    (0x04F8, 0x04F8, Upper),
    (0x04F9, 0x04F9, Lower),
    (0x04FA, 0x04FA, Upper),
    (0x04FB, 0x04FB, Lower),
    (0x04FC, 0x04FC, Upper),
    (0x04FD, 0x04FD, Lower),
    (0x04FE, 0x04FE, Upper),
    (0x04FF, 0x04FF, Lower),
    (0x0500, 0x0500, Upper),
    (0x0501, 0x0501, Lower),
    (0x0502, 0x0502, Upper),
    (0x0503, 0x0503, Lower),
    (0x0504, 0x0504, Upper),
    (0x0505, 0x0505, Lower),
    (0x0506, 0x0506, Upper),
    (0x0507, 0x0507, Lower),
    (0x0508, 0x0508, Upper),
    (0x0509, 0x0509, Lower),
    (0x050A, 0x050A, Upper),
    (0x050B, 0x050B, Lower),
    (0x050C, 0x050C, Upper),
    (0x050D, 0x050D, Lower),
    (0x050E, 0x050E, Upper),
    (0x050F, 0x050F, Lower),
    (0x0510, 0x0510, Upper),
    (0x0511, 0x0511, Lower),
    (0x0512, 0x0512, Upper),
    (0x0513, 0x0513, Lower),
    (0x0514, 0x0514, Upper),
    (0x0515, 0x0515, Lower),
    (0x0516, 0x0516, Upper),
    (0x0517, 0x0517, Lower),
    (0x0518, 0x0518, Upper),
    (0x0519, 0x0519, Lower),
    (0x051A, 0x051A, Upper),
    (0x051B, 0x051B, Lower),
    (0x051C, 0x051C, Upper),
    (0x051D, 0x051D, Lower),
    (0x051E, 0x051E, Upper),
    (0x051F, 0x051F, Lower),
    (0x0520, 0x0520, Upper),
    (0x0521, 0x0521, Lower),
    (0x0522, 0x0522, Upper),
    (0x0523, 0x0523, Lower),
    (0x0524, 0x0524, Upper),
    (0x0525, 0x0525, Lower),
    (0x0526, 0x0526, Upper),
    (0x0527, 0x0527, Lower),
    (0x0528, 0x0528, Upper),
    (0x0529, 0x0529, Lower),
    (0x052A, 0x052A, Upper),
    (0x052B, 0x052B, Lower),
    (0x052C, 0x052C, Upper),
    (0x052D, 0x052D, Lower),
    (0x052E, 0x052E, Upper),
    (0x052F, 0x052F, Lower),
    (0x0531, 0x0556, Upper),
    (0x0559, 0x0559, OLetter),
    (0x055D, 0x055D, SContinue),
    (0x0560, 0x0588, Lower),
    (0x0589, 0x0589, STerm),
    (0x0591, 0x05BD, Extend),
    (0x05BF, 0x05BF, Extend),
    (0x05C1, 0x05C2, Extend),
    (0x05C4, 0x05C5, Extend),
    (0x05C7, 0x05C7, Extend),
    (0x05D0, 0x05EA, OLetter),
    (0x05EF, 0x05F3, OLetter),
    (0x0600, 0x0605, Numeric),
    (0x060C, 0x060D, SContinue),
    (0x0610, 0x061A, Extend),
    (0x061C, 0x061C, Format),
    (0x061D, 0x061F, STerm),
    (0x0620, 0x064A, OLetter),
    (0x064B, 0x065F, Extend),
    (0x0660, 0x0669, Numeric),
    (0x066B, 0x066C, Numeric),
    (0x066E, 0x066F, OLetter),
    (0x0670, 0x0670, Extend),
    (0x0671, 0x06D3, OLetter),
    (0x06D4, 0x06D4, STerm),
    (0x06D5, 0x06D5, OLetter),
    (0x06D6, 0x06DC, Extend),
    (0x06DD, 0x06DD, Numeric),
    (0x06DF, 0x06E4, Extend),
    (0x06E5, 0x06E6, OLetter),
    (0x06E7, 0x06E8, Extend),
    (0x06EA, 0x06ED, Extend),
    (0x06EE, 0x06EF, OLetter),
    (0x06F0, 0x06F9, Numeric),
    (0x06FA, 0x06FC, OLetter),
    (0x06FF, 0x06FF, OLetter),
    (0x0700, 0x0702, STerm),
    (0x070F, 0x070F, Format),
    (0x0710, 0x0710, OLetter),
    (0x0711, 0x0711, Extend),
    (0x0712, 0x072F, OLetter),
    (0x0730, 0x074A, Extend),
    (0x074D, 0x07A5, OLetter),
    (0x07A6, 0x07B0, Extend),
    (0x07B1, 0x07B1, OLetter),
    (0x07C0, 0x07C9, Numeric),
    (0x07CA, 0x07EA, OLetter),
    (0x07EB, 0x07F3, Extend),
    (0x07F4, 0x07F5, OLetter),
    (0x07F8, 0x07F8, SContinue),
    (0x07F9, 0x07F9, STerm),
    (0x07FA, 0x07FA, OLetter),
    (0x07FD, 0x07FD, Extend),
    (0x0800, 0x0815, OLetter),
    (0x0816, 0x0819, Extend),
    (0x081A, 0x081A, OLetter),
    (0x081B, 0x0823, Extend),
    (0x0824, 0x0824, OLetter),
    (0x0825, 0x0827, Extend),
    (0x0828, 0x0828, OLetter),
    (0x0829, 0x082D, Extend),
    (0x0837, 0x0837, STerm),
    (0x0839, 0x0839, STerm),
    (0x083D, 0x083E, STerm),
    (0x0840, 0x0858, OLetter),
    (0x0859, 0x085B, Extend),
    (0x0860, 0x086A, OLetter),
    (0x0870, 0x0887, OLetter),
    (0x0889, 0x088F, OLetter),
    (0x0890, 0x0891, Numeric),
    (0x0897, 0x089F, Extend),
    (0x08A0, 0x08C9, OLetter),
    (0x08CA, 0x08E1, Extend),
    (0x08E2, 0x08E2, Numeric),
    (0x08E3, 0x0903, Extend),
    (0x0904, 0x0939, OLetter),
    (0x093A, 0x093C, Extend),
    (0x093D, 0x093D, OLetter),
    (0x093E, 0x094F, Extend),
    (0x0950, 0x0950, OLetter),
    (0x0951, 0x0957, Extend),
    (0x0958, 0x0961, OLetter),
    (0x0962, 0x0963, Extend),
    (0x0964, 0x0965, STerm),
    (0x0966, 0x096F, Numeric),
    (0x0971, 0x0980, OLetter),
    (0x0981, 0x0983, Extend),
    (0x0985, 0x098C, OLetter),
    (0x098F, 0x0990, OLetter),
    (0x0993, 0x09A8, OLetter),
    (0x09AA, 0x09B0, OLetter),
    (0x09B2, 0x09B2, OLetter),
    (0x09B6, 0x09B9, OLetter),
    (0x09BC, 0x09BC, Extend),
    (0x09BD, 0x09BD, OLetter),
    (0x09BE, 0x09C4, Extend),
    (0x09C7, 0x09C8, Extend),
    (0x09CB, 0x09CD, Extend),
    (0x09CE, 0x09CE, OLetter),
    (0x09D7, 0x09D7, Extend),
    (0x09DC, 0x09DD, OLetter),
    (0x09DF, 0x09E1, OLetter),
    (0x09E2, 0x09E3, Extend),
    (0x09E6, 0x09EF, Numeric),
    (0x09F0, 0x09F1, OLetter),
    (0x09FC, 0x09FC, OLetter),
    (0x09FE, 0x09FE, Extend),
    (0x0A01, 0x0A03, Extend),
    (0x0A05, 0x0A0A, OLetter),
    (0x0A0F, 0x0A10, OLetter),
    (0x0A13, 0x0A28, OLetter),
    (0x0A2A, 0x0A30, OLetter),
    (0x0A32, 0x0A33, OLetter),
    (0x0A35, 0x0A36, OLetter),
    (0x0A38, 0x0A39, OLetter),
    (0x0A3C, 0x0A3C, Extend),
    (0x0A3E, 0x0A42, Extend),
    (0x0A47, 0x0A48, Extend),
    (0x0A4B, 0x0A4D, Extend),
    (0x0A51, 0x0A51, Extend),
    (0x0A59, 0x0A5C, OLetter),
    (0x0A5E, 0x0A5E, OLetter),
    (0x0A66, 0x0A6F, Numeric),
    (0x0A70, 0x0A71, Extend),
    (0x0A72, 0x0A74, OLetter),
    (0x0A75, 0x0A75, Extend),
    (0x0A81, 0x0A83, Extend),
    (0x0A85, 0x0A8D, OLetter),
    (0x0A8F, 0x0A91, OLetter),
    (0x0A93, 0x0AA8, OLetter),
    (0x0AAA, 0x0AB0, OLetter),
    (0x0AB2, 0x0AB3, OLetter),
    (0x0AB5, 0x0AB9, OLetter),
    (0x0ABC, 0x0ABC, Extend),
    (0x0ABD, 0x0ABD, OLetter),
    (0x0ABE, 0x0AC5, Extend),
    (0x0AC7, 0x0AC9, Extend),
    (0x0ACB, 0x0ACD, Extend),
    (0x0AD0, 0x0AD0, OLetter),
    (0x0AE0, 0x0AE1, OLetter),
    (0x0AE2, 0x0AE3, Extend),
    (0x0AE6, 0x0AEF, Numeric),
    (0x0AF9, 0x0AF9, OLetter),
    (0x0AFA, 0x0AFF, Extend),
    (0x0B01, 0x0B03, Extend),
    (0x0B05, 0x0B0C, OLetter),
    (0x0B0F, 0x0B10, OLetter),
    (0x0B13, 0x0B28, OLetter),
    (0x0B2A, 0x0B30, OLetter),
    (0x0B32, 0x0B33, OLetter),
    (0x0B35, 0x0B39, OLetter),
    (0x0B3C, 0x0B3C, Extend),
    (0x0B3D, 0x0B3D, OLetter),
    (0x0B3E, 0x0B44, Extend),
    (0x0B47, 0x0B48, Extend),
    (0x0B4B, 0x0B4D, Extend),
    (0x0B55, 0x0B57, Extend),
    (0x0B5C, 0x0B5D, OLetter),
    (0x0B5F, 0x0B61, OLetter),
    (0x0B62, 0x0B63, Extend),
    (0x0B66, 0x0B6F, Numeric),
    (0x0B71, 0x0B71, OLetter),
    (0x0B82, 0x0B82, Extend),
    (0x0B83, 0x0B83, OLetter),
    (0x0B85, 0x0B8A, OLetter),
    (0x0B8E, 0x0B90, OLetter),
    (0x0B92, 0x0B95, OLetter),
    (0x0B99, 0x0B9A, OLetter),
    (0x0B9C, 0x0B9C, OLetter),
    (0x0B9E, 0x0B9F, OLetter),
    (0x0BA3, 0x0BA4, OLetter),
    (0x0BA8, 0x0BAA, OLetter),
    (0x0BAE, 0x0BB9, OLetter),
    (0x0BBE, 0x0BC2, Extend),
    (0x0BC6, 0x0BC8, Extend),
    (0x0BCA, 0x0BCD, Extend),
    (0x0BD0, 0x0BD0, OLetter),
    (0x0BD7, 0x0BD7, Extend),
    (0x0BE6, 0x0BEF, Numeric),
    (0x0C00, 0x0C04, Extend),
    (0x0C05, 0x0C0C, OLetter),
    (0x0C0E, 0x0C10, OLetter),
    (0x0C12, 0x0C28, OLetter),
    (0x0C2A, 0x0C39, OLetter),
    (0x0C3C, 0x0C3C, Extend),
    (0x0C3D, 0x0C3D, OLetter),
    (0x0C3E, 0x0C44, Extend),
    (0x0C46, 0x0C48, Extend),
    (0x0C4A, 0x0C4D, Extend),
    (0x0C55, 0x0C56, Extend),
    (0x0C58, 0x0C5A, OLetter),
    (0x0C5C, 0x0C5D, OLetter),
    (0x0C60, 0x0C61, OLetter),
    (0x0C62, 0x0C63, Extend),
    (0x0C66, 0x0C6F, Numeric),
    (0x0C80, 0x0C80, OLetter),
    (0x0C81, 0x0C83, Extend),
    (0x0C85, 0x0C8C, OLetter),
    (0x0C8E, 0x0C90, OLetter),
    (0x0C92, 0x0CA8, OLetter),
    (0x0CAA, 0x0CB3, OLetter),
    (0x0CB5, 0x0CB9, OLetter),
    (0x0CBC, 0x0CBC, Extend),
    (0x0CBD, 0x0CBD, OLetter),
    (0x0CBE, 0x0CC4, Extend),
    (0x0CC6, 0x0CC8, Extend),
    (0x0CCA, 0x0CCD, Extend),
    (0x0CD5, 0x0CD6, Extend),
    (0x0CDC, 0x0CDE, OLetter),
    (0x0CE0, 0x0CE1, OLetter),
    (0x0CE2, 0x0CE3, Extend),
    (0x0CE6, 0x0CEF, Numeric),
    (0x0CF1, 0x0CF2, OLetter),
    (0x0CF3, 0x0CF3, Extend),
    (0x0D00, 0x0D03, Extend),
    (0x0D04, 0x0D0C, OLetter),
    (0x0D0E, 0x0D10, OLetter),
    (0x0D12, 0x0D3A, OLetter),
    (0x0D3B, 0x0D3C, Extend),
    (0x0D3D, 0x0D3D, OLetter),
    (0x0D3E, 0x0D44, Extend),
    (0x0D46, 0x0D48, Extend),
    (0x0D4A, 0x0D4D, Extend),
    (0x0D4E, 0x0D4E, OLetter),
    (0x0D54, 0x0D56, OLetter),
    (0x0D57, 0x0D57, Extend),
    (0x0D5F, 0x0D61, OLetter),
    (0x0D62, 0x0D63, Extend),
    (0x0D66, 0x0D6F, Numeric),
    (0x0D7A, 0x0D7F, OLetter),
    (0x0D81, 0x0D83, Extend),
    (0x0D85, 0x0D96, OLetter),
    (0x0D9A, 0x0DB1, OLetter),
    (0x0DB3, 0x0DBB, OLetter),
    (0x0DBD, 0x0DBD, OLetter),
    (0x0DC0, 0x0DC6, OLetter),
    (0x0DCA, 0x0DCA, Extend),
    (0x0DCF, 0x0DD4, Extend),
    (0x0DD6, 0x0DD6, Extend),
    (0x0DD8, 0x0DDF, Extend),
    (0x0DE6, 0x0DEF, Numeric),
    (0x0DF2, 0x0DF3, Extend),
    (0x0E01, 0x0E30, OLetter),
    (0x0E31, 0x0E31, Extend),
    (0x0E32, 0x0E33, OLetter),
    (0x0E34, 0x0E3A, Extend),
    (0x0E40, 0x0E46, OLetter),
    (0x0E47, 0x0E4E, Extend),
    (0x0E50, 0x0E59, Numeric),
    (0x0E81, 0x0E82, OLetter),
    (0x0E84, 0x0E84, OLetter),
    (0x0E86, 0x0E8A, OLetter),
    (0x0E8C, 0x0EA3, OLetter),
    (0x0EA5, 0x0EA5, OLetter),
    (0x0EA7, 0x0EB0, OLetter),
    (0x0EB1, 0x0EB1, Extend),
    (0x0EB2, 0x0EB3, OLetter),
    (0x0EB4, 0x0EBC, Extend),
    (0x0EBD, 0x0EBD, OLetter),
    (0x0EC0, 0x0EC4, OLetter),
    (0x0EC6, 0x0EC6, OLetter),
    (0x0EC8, 0x0ECE, Extend),
    (0x0ED0, 0x0ED9, Numeric),
    (0x0EDC, 0x0EDF, OLetter),
    (0x0F00, 0x0F00, OLetter),
    (0x0F18, 0x0F19, Extend),
    (0x0F20, 0x0F29, Numeric),
    (0x0F35, 0x0F35, Extend),
    (0x0F37, 0x0F37, Extend),
    (0x0F39, 0x0F39, Extend),
    (0x0F3A, 0x0F3D, Close),
    (0x0F3E, 0x0F3F, Extend),
    (0x0F40, 0x0F47, OLetter),
    (0x0F49, 0x0F6C, OLetter),
    (0x0F71, 0x0F84, Extend),
    (0x0F86, 0x0F87, Extend),
    (0x0F88, 0x0F8C, OLetter),
    (0x0F8D, 0x0F97, Extend),
    (0x0F99, 0x0FBC, Extend),
    (0x0FC6, 0x0FC6, Extend),
    (0x1000, 0x102A, OLetter),
    (0x102B, 0x103E, Extend),
    (0x103F, 0x103F, OLetter),
    (0x1040, 0x1049, Numeric),
    (0x104A, 0x104B, STerm),
    (0x1050, 0x1055, OLetter),
    (0x1056, 0x1059, Extend),
    (0x105A, 0x105D, OLetter),
    (0x105E, 0x1060, Extend),
    (0x1061, 0x1061, OLetter),
    (0x1062, 0x1064, Extend),
    (0x1065, 0x1066, OLetter),
    (0x1067, 0x106D, Extend),
    (0x106E, 0x1070, OLetter),
    (0x1071, 0x1074, Extend),
    (0x1075, 0x1081, OLetter),
    (0x1082, 0x108D, Extend),
    (0x108E, 0x108E, OLetter),
    (0x108F, 0x108F, Extend),
    (0x1090, 0x1099, Numeric),
    (0x109A, 0x109D, Extend),
    (0x10A0, 0x10C5, Upper),
    (0x10C7, 0x10C7, Upper),
    (0x10CD, 0x10CD, Upper),
    (0x10D0, 0x10FA, OLetter),
    (0x10FC, 0x10FC, Lower),
    (0x10FD, 0x1248, OLetter),
    (0x124A, 0x124D, OLetter),
    (0x1250, 0x1256, OLetter),
    (0x1258, 0x1258, OLetter),
    (0x125A, 0x125D, OLetter),
    (0x1260, 0x1288, OLetter),
    (0x128A, 0x128D, OLetter),
    (0x1290, 0x12B0, OLetter),
    (0x12B2, 0x12B5, OLetter),
    (0x12B8, 0x12BE, OLetter),
    (0x12C0, 0x12C0, OLetter),
    (0x12C2, 0x12C5, OLetter),
    (0x12C8, 0x12D6, OLetter),
    (0x12D8, 0x1310, OLetter),
    (0x1312, 0x1315, OLetter),
    (0x1318, 0x135A, OLetter),
    (0x135D, 0x135F, Extend),
    (0x1362, 0x1362, STerm),
    (0x1367, 0x1368, STerm),
    (0x1380, 0x138F, OLetter),
    (0x13A0, 0x13F5, Upper),
    (0x13F8, 0x13FD, Lower),
    (0x1401, 0x166C, OLetter),
    (0x166E, 0x166E, STerm),
    (0x166F, 0x167F, OLetter),
    (0x1680, 0x1680, Sp),
    (0x1681, 0x169A, OLetter),
    (0x169B, 0x169C, Close),
    (0x16A0, 0x16EA, OLetter),
    (0x16EE, 0x16F8, OLetter),
    (0x1700, 0x1711, OLetter),
    (0x1712, 0x1715, Extend),
    (0x171F, 0x1731, OLetter),
    (0x1732, 0x1734, Extend),
    (0x1735, 0x1736, STerm),
    (0x1740, 0x1751, OLetter),
    (0x1752, 0x1753, Extend),
    (0x1760, 0x176C, OLetter),
    (0x176E, 0x1770, OLetter),
    (0x1772, 0x1773, Extend),
    (0x1780, 0x17B3, OLetter),
    (0x17B4, 0x17D3, Extend),
    (0x17D4, 0x17D5, STerm),
    (0x17D7, 0x17D7, OLetter),
    (0x17DC, 0x17DC, OLetter),
    (0x17DD, 0x17DD, Extend),
    (0x17E0, 0x17E9, Numeric),
    (0x1802, 0x1802, SContinue),
    (0x1803, 0x1803, STerm),
    (0x1808, 0x1808, SContinue),
    (0x1809, 0x1809, STerm),
    (0x180B, 0x180D, Extend),
    (0x180E, 0x180E, Format),
    (0x180F, 0x180F, Extend),
    (0x1810, 0x1819, Numeric),
    (0x1820, 0x1878, OLetter),
    (0x1880, 0x1884, OLetter),
    (0x1885, 0x1886, Extend),
    (0x1887, 0x18A8, OLetter),
    (0x18A9, 0x18A9, Extend),
    (0x18AA, 0x18AA, OLetter),
    (0x18B0, 0x18F5, OLetter),
    (0x1900, 0x191E, OLetter),
    (0x1920, 0x192B, Extend),
    (0x1930, 0x193B, Extend),
    (0x1944, 0x1945, STerm),
    (0x1946, 0x194F, Numeric),
    (0x1950, 0x196D, OLetter),
    (0x1970, 0x1974, OLetter),
    (0x1980, 0x19AB, OLetter),
    (0x19B0, 0x19C9, OLetter),
    (0x19D0, 0x19DA, Numeric),
    (0x1A00, 0x1A16, OLetter),
    (0x1A17, 0x1A1B, Extend),
    (0x1A20, 0x1A54, OLetter),
    (0x1A55, 0x1A5E, Extend),
    (0x1A60, 0x1A7C, Extend),
    (0x1A7F, 0x1A7F, Extend),
    (0x1A80, 0x1A89, Numeric),
    (0x1A90, 0x1A99, Numeric),
    (0x1AA7, 0x1AA7, OLetter),
    (0x1AA8, 0x1AAB, STerm),
    (0x1AB0, 0x1ADD, Extend),
    (0x1AE0, 0x1AEB, Extend),
    (0x1B00, 0x1B04, Extend),
    (0x1B05, 0x1B33, OLetter),
    (0x1B34, 0x1B44, Extend),
    (0x1B45, 0x1B4C, OLetter),
    (0x1B4E, 0x1B4F, STerm),
    (0x1B50, 0x1B59, Numeric),
    (0x1B5A, 0x1B5B, STerm),
    (0x1B5E, 0x1B5F, STerm),
    (0x1B6B, 0x1B73, Extend),
    (0x1B7D, 0x1B7F, STerm),
    (0x1B80, 0x1B82, Extend),
    (0x1B83, 0x1BA0, OLetter),
    (0x1BA1, 0x1BAD, Extend),
    (0x1BAE, 0x1BAF, OLetter),
    (0x1BB0, 0x1BB9, Numeric),
    (0x1BBA, 0x1BE5, OLetter),
    (0x1BE6, 0x1BF3, Extend),
    (0x1C00, 0x1C23, OLetter),
    (0x1C24, 0x1C37, Extend),
    (0x1C3B, 0x1C3C, STerm),
    (0x1C40, 0x1C49, Numeric),
    (0x1C4D, 0x1C4F, OLetter),
    (0x1C50, 0x1C59, Numeric),
    (0x1C5A, 0x1C7D, OLetter),
    (0x1C7E, 0x1C7F, STerm),
    (0x1C80, 0x1C88, Lower),
    (0x1C89, 0x1C89, Upper),
    (0x1C8A, 0x1C8A, Lower),
    (0x1C90, 0x1CBA, OLetter),
    (0x1CBD, 0x1CBF, OLetter),
    (0x1CD0, 0x1CD2, Extend),
    (0x1CD4, 0x1CE8, Extend),
    (0x1CE9, 0x1CEC, OLetter),
    (0x1CED, 0x1CED, Extend),
    (0x1CEE, 0x1CF3, OLetter),
    (0x1CF4, 0x1CF4, Extend),
    (0x1CF5, 0x1CF6, OLetter),
    (0x1CF7, 0x1CF9, Extend),
    (0x1CFA, 0x1CFA, OLetter),
    (0x1D00, 0x1DBF, Lower),
    (0x1DC0, 0x1DFF, Extend),
    (0x1E00, 0x1E00, Upper),
    (0x1E01, 0x1E01, Lower),
    (0x1E02, 0x1E02, Upper),
    (0x1E03, 0x1E03, Lower),
    (0x1E04, 0x1E04, Upper),
    (0x1E05, 0x1E05, Lower),
    (0x1E06, 0x1E06, Upper),
    (0x1E07, 0x1E07, Lower),
    (0x1E08, 0x1E08, Upper),
    (0x1E09, 0x1E09, Lower),
    (0x1E0A, 0x1E0A, Upper),
    (0x1E0B, 0x1E0B, Lower),
    (0x1E0C, 0x1E0C, Upper),
    (0x1E0D, 0x1E0D, Lower),
    (0x1E0E, 0x1E0E, Upper),
    (0x1E0F, 0x1E0F, Lower),
    (0x1E10, 0x1E10, Upper),
    (0x1E11, 0x1E11, Lower),
    (0x1E12, 0x1E12, Upper),
    (0x1E13, 0x1E13, Lower),
    (0x1E14, 0x1E14, Upper),
    (0x1E15, 0x1E15, Lower),
    (0x1E16, 0x1E16, Upper),
    (0x1E17, 0x1E17, Lower),
    (0x1E18, 0x1E18, Upper),
    (0x1E19, 0x1E19, Lower),
    (0x1E1A, 0x1E1A, Upper),
    (0x1E1B, 0x1E1B, Lower),
    (0x1E1C, 0x1E1C, Upper),
    (0x1E1D, 0x1E1D, Lower),
    (0x1E1E, 0x1E1E, Upper),
    (0x1E1F, 0x1E1F, Lower),
    (0x1E20, 0x1E20, Upper),
    (0x1E21, 0x1E21, Lower),
    (0x1E22, 0x1E22, Upper),
    (0x1E23, 0x1E23, Lower),
    (0x1E24, 0x1E24, Upper),
    (0x1E25, 0x1E25, Lower),
    (0x1E26, 0x1E26, Upper),
    (0x1E27, 0x1E27, Lower),
    (0x1E28, 0x1E28, Upper),
    (0x1E29, 0x1E29, Lower),
    (0x1E2A, 0x1E2A, Upper),
    (0x1E2B, 0x1E2B, Lower),
    (0x1E2C, 0x1E2C, Upper),
    (0x1E2D, 0x1E2D, Lower),
    (0x1E2E, 0x1E2E, Upper),
    (0x1E2F, 0x1E2F, Lower),
    (0x1E30, 0x1E30, Upper),
    (0x1E31, 0x1E31, Lower),
    (0x1E32, 0x1E32, Upper),
    (0x1E33, 0x1E33, Lower),
    (0x1E34, 0x1E34, Upper),
    (0x1E35, 0x1E35, Lower),
    (0x1E36, 0x1E36, Upper),
    (0x1E37, 0x1E37, Lower),
    (0x1E38, 0x1E38, Upper),
    (0x1E39, 0x1E39, Lower),
    (0x1E3A, 0x1E3A, Upper),
    (0x1E3B, 0x1E3B, Lower),
    (0x1E3C, 0x1E3C, Upper),
    (0x1E3D, 0x1E3D, Lower),
    (0x1E3E, 0x1E3E, Upper),
    (0x1E3F, 0x1E3F, Lower),
    (0x1E40, 0x1E40, Upper),
    (0x1E41, 0x1E41, Lower),
    (0x1E42, 0x1E42, Upper),
    (0x1E43, 0x1E43, Lower),
    (0x1E44, 0x1E44, Upper),
    (0x1E45, 0x1E45, Lower),
    (0x1E46, 0x1E46, Upper),
    (0x1E47, 0x1E47, Lower),
    (0x1E48, 0x1E48, Upper),
    (0x1E49, 0x1E49, Lower),
    (0x1E4A, 0x1E4A, Upper),
    (0x1E4B, 0x1E4B, Lower),
    (0x1E4C, 0x1E4C, Upper),
    (0x1E4D, 0x1E4D, Lower),
    (0x1E4E, 0x1E4E, Upper),
    (0x1E4F, 0x1E4F, Lower),
    (0x1E50, 0x1E50, Upper),
    (0x1E51, 0x1E51, Lower),
    (0x1E52, 0x1E52, Upper),
    (0x1E53, 0x1E53, Lower),
    (0x1E54, 0x1E54, Upper),
    (0x1E55, 0x1E55, Lower),
    (0x1E56, 0x1E56, Upper),
    (0x1E57, 0x1E57, Lower),
    (0x1E58, 0x1E58, Upper),
    (0x1E59, 0x1E59, Lower),
    (0x1E5A, 0x1E5A, Upper),
    (0x1E5B, 0x1E5B, Lower),
    (0x1E5C, 0x1E5C, Upper),
    (0x1E5D, 0x1E5D, Lower),
    (0x1E5E, 0x1E5E, Upper),
    (0x1E5F, 0x1E5F, Lower),
    (0x1E60, 0x1E60, Upper),
    (0x1E61, 0x1E61, Lower),
    (0x1E62, 0x1E62, Upper),
    (0x1E63, 0x1E63, Lower),
    (0x1E64, 0x1E64, Upper),
    (0x1E65, 0x1E65, Lower),
    (0x1E66, 0x1E66, Upper),
    (0x1E67, 0x1E67, Lower),
    (0x1E68, 0x1E68, Upper),
    (0x1E69, 0x1E69, Lower),
    (0x1E6A, 0x1E6A, Upper),
    (0x1E6B, 0x1E6B, Lower),
    (0x1E6C, 0x1E6C, Upper),
    (0x1E6D, 0x1E6D, Lower),
    (0x1E6E, 0x1E6E, Upper),
    (0x1E6F, 0x1E6F, Lower),
    (0x1E70, 0x1E70, Upper),
    (0x1E71, 0x1E71, Lower),
    (0x1E72, 0x1E72, Upper),
    (0x1E73, 0x1E73, Lower),
    (0x1E74, 0x1E74, Upper),
    (0x1E75, 0x1E75, Lower),
    (0x1E76, 0x1E76, Upper),
    (0x1E77, 0x1E77, Lower),
    (0x1E78, 0x1E78, Upper),
    (0x1E79, 0x1E79, Lower),
    (0x1E7A, 0x1E7A, Upper),
    (0x1E7B, 0x1E7B, Lower),
    (0x1E7C, 0x1E7C, Upper),
    (0x1E7D, 0x1E7D, Lower),
    (0x1E7E, 0x1E7E, Upper),
    (0x1E7F, 0x1E7F, Lower),
    (0x1E80, 0x1E80, Upper),
    (0x1E81, 0x1E81, Lower),
    (0x1E82, 0x1E82, Upper),
    (0x1E83, 0x1E83, Lower),
    (0x1E84, 0x1E84, Upper),
    (0x1E85, 0x1E85, Lower),
    (0x1E86, 0x1E86, Upper),
    (0x1E87, 0x1E87, Lower),
    (0x1E88, 0x1E88, Upper),
    (0x1E89, 0x1E89, Lower),
    (0x1E8A, 0x1E8A, Upper),
    (0x1E8B, 0x1E8B, Lower),
    (0x1E8C, 0x1E8C, Upper),
    (0x1E8D, 0x1E8D, Lower),
    (0x1E8E, 0x1E8E, Upper),
    (0x1E8F, 0x1E8F, Lower),
    (0x1E90, 0x1E90, Upper),
    (0x1E91, 0x1E91, Lower),
    (0x1E92, 0x1E92, Upper),
    (0x1E93, 0x1E93, Lower),
    (0x1E94, 0x1E94, Upper),
    (0x1E95, 0x1E9D, Lower),
    (0x1E9E, 0x1E9E, Upper),
    (0x1E9F, 0x1E9F, Lower),
    (0x1EA0, 0x1EA0, Upper),
    (0x1EA1, 0x1EA1, Lower),
    (0x1EA2, 0x1EA2, Upper),
    (0x1EA3, 0x1EA3, Lower),
    (0x1EA4, 0x1EA4, Upper),
    (0x1EA5, 0x1EA5, Lower),
    (0x1EA6, 0x1EA6, Upper),
    (0x1EA7, 0x1EA7, Lower),
    (0x1EA8, 0x1EA8, Upper),
    (0x1EA9, 0x1EA9, Lower),
    (0x1EAA, 0x1EAA, Upper),
    (0x1EAB, 0x1EAB, Lower),
    (0x1EAC, 0x1EAC, Upper),
    (0x1EAD, 0x1EAD, Lower),
    (0x1EAE, 0x1EAE, Upper),
    (0x1EAF, 0x1EAF, Lower),
    (0x1EB0, 0x1EB0, Upper),
    (0x1EB1, 0x1EB1, Lower),
    (0x1EB2, 0x1EB2, Upper),
    (0x1EB3, 0x1EB3, Lower),
    (0x1EB4, 0x1EB4, Upper),
    (0x1EB5, 0x1EB5, Lower),
    (0x1EB6, 0x1EB6, Upper),
    (0x1EB7, 0x1EB7, Lower),
    (0x1EB8, 0x1EB8, Upper),
    (0x1EB9, 0x1EB9, Lower),
    (0x1EBA, 0x1EBA, Upper),
    (0x1EBB, 0x1EBB, Lower),
    (0x1EBC, 0x1EBC, Upper),
    (0x1EBD, 0x1EBD, Lower),
    (0x1EBE, 0x1EBE, Upper),
    (0x1EBF, 0x1EBF, Lower),
    (0x1EC0, 0x1EC0, Upper),
    (0x1EC1, 0x1EC1, Lower),
    (0x1EC2, 0x1EC2, Upper),
    (0x1EC3, 0x1EC3, Lower),
    (0x1EC4, 0x1EC4, Upper),
    (0x1EC5, 0x1EC5, Lower),
    (0x1EC6, 0x1EC6, Upper),
    (0x1EC7, 0x1EC7, Lower),
    (0x1EC8, 0x1EC8, Upper),
    (0x1EC9, 0x1EC9, Lower),
    (0x1ECA, 0x1ECA, Upper),
    (0x1ECB, 0x1ECB, Lower),
    (0x1ECC, 0x1ECC, Upper),
    (0x1ECD, 0x1ECD, Lower),
    (0x1ECE, 0x1ECE, Upper),
    (0x1ECF, 0x1ECF, Lower),
    (0x1ED0, 0x1ED0, Upper),
    (0x1ED1, 0x1ED1, Lower),
    (0x1ED2, 0x1ED2, Upper),
    (0x1ED3, 0x1ED3, Lower),
    (0x1ED4, 0x1ED4, Upper),
    (0x1ED5, 0x1ED5, Lower),
    (0x1ED6, 0x1ED6, Upper),
    (0x1ED7, 0x1ED7, Lower),
    (0x1ED8, 0x1ED8, Upper),
    (0x1ED9, 0x1ED9, Lower),
    (0x1EDA, 0x1EDA, Upper),
    (0x1EDB, 0x1EDB, Lower),
    (0x1EDC, 0x1EDC, Upper),
    (0x1EDD, 0x1EDD, Lower),
    (0x1EDE, 0x1EDE, Upper),
    (0x1EDF, 0x1EDF, Lower),
    (0x1EE0, 0x1EE0, Upper),
    (0x1EE1, 0x1EE1, Lower),
    (0x1EE2, 0x1EE2, Upper),
    (0x1EE3, 0x1EE3, Lower),
    (0x1EE4, 0x1EE4, Upper),
    (0x1EE5, 0x1EE5, Lower),
    (0x1EE6, 0x1EE6, Upper),
    (0x1EE7, 0x1EE7, Lower),
    (0x1EE8, 0x1EE8, Upper),
    (0x1EE9, 0x1EE9, Lower),
    (0x1EEA, 0x1EEA, Upper),
    (0x1EEB, 0x1EEB, Lower),
    (0x1EEC, 0x1EEC, Upper),
    (0x1EED, 0x1EED, Lower),
    (0x1EEE, 0x1EEE, Upper),
    (0x1EEF, 0x1EEF, Lower),
    (0x1EF0, 0x1EF0, Upper),
    (0x1EF1, 0x1EF1, Lower),
    (0x1EF2, 0x1EF2, Upper),
    (0x1EF3, 0x1EF3, Lower),
    (0x1EF4, 0x1EF4, Upper),
    (0x1EF5, 0x1EF5, Lower),
    (0x1EF6, 0x1EF6, Upper),
    (0x1EF7, 0x1EF7, Lower),
    (0x1EF8, 0x1EF8, Upper),
    (0x1EF9, 0x1EF9, Lower),
    (0x1EFA, 0x1EFA, Upper),
    (0x1EFB, 0x1EFB, Lower),
    (0x1EFC, 0x1EFC, Upper),
    (0x1EFD, 0x1EFD, Lower),
    (0x1EFE, 0x1EFE, Upper),
    (0x1EFF, 0x1F07, Lower),
    (0x1F08, 0x1F0F, Upper),
    (0x1F10, 0x1F15, Lower),
    (0x1F18, 0x1F1D, Upper),
    (0x1F20, 0x1F27, Lower),
    (0x1F28, 0x1F2F, Upper),
    (0x1F30, 0x1F37, Lower),
    (0x1F38, 0x1F3F, Upper),
    (0x1F40, 0x1F45, Lower),
    (0x1F48, 0x1F4D, Upper),
    (0x1F50, 0x1F57, Lower),
    (0x1F59, 0x1F59, Upper),
    (0x1F5B, 0x1F5B, Upper),
    (0x1F5D, 0x1F5D, Upper),
    (0x1F5F, 0x1F5F, Upper),
    (0x1F60, 0x1F67, Lower),
    (0x1F68, 0x1F6F, Upper),
    (0x1F70, 0x1F7D, Lower),
    (0x1F80, 0x1F87, Lower),
    (0x1F88, 0x1F8F, Upper),
    (0x1F90, 0x1F97, Lower),
    (0x1F98, 0x1F9F, Upper),
    (0x1FA0, 0x1FA7, Lower),
    (0x1FA8, 0x1FAF, Upper),
    (0x1FB0, 0x1FB4, Lower),
    (0x1FB6, 0x1FB7, Lower),
    (0x1FB8, 0x1FBC, Upper),
    (0x1FBE, 0x1FBE, Lower),
    (0x1FC2, 0x1FC4, Lower),
    (0x1FC6, 0x1FC7, Lower),
    (0x1FC8, 0x1FCC, Upper),
    (0x1FD0, 0x1FD3, Lower),
    (0x1FD6, 0x1FD7, Lower),
    (0x1FD8, 0x1FDB, Upper),
    (0x1FE0, 0x1FE7, Lower),
    (0x1FE8, 0x1FEC, Upper),
    (0x1FF2, 0x1FF4, Lower),
    (0x1FF6, 0x1FF7, Lower),
    (0x1FF8, 0x1FFC, Upper),
    (0x2000, 0x200A, Sp),
    (0x200B, 0x200B, Format),
    (0x200C, 0x200D, Extend),
    (0x200E, 0x200F, Format),
    (0x2013, 0x2014, SContinue),
    (0x2018, 0x201F, Close),
    (0x2024, 0x2024, ATerm),
    (0x2028, 0x2029, Sep),
    (0x202A, 0x202E, Format),
    (0x202F, 0x202F, Sp),
    (0x2039, 0x203A, Close),
    (0x203C, 0x203D, STerm),
    (0x2045, 0x2046, Close),
    (0x2047, 0x2049, STerm),
    (0x205F, 0x205F, Sp),
    (0x2060, 0x2064, Format),
    (0x2066, 0x206F, Format),
    (0x2071, 0x2071, Lower),
    (0x207D, 0x207E, Close),
    (0x207F, 0x207F, Lower),
    (0x208D, 0x208E, Close),
    (0x2090, 0x209C, Lower),
    (0x20D0, 0x20F0, Extend),
    (0x2102, 0x2102, Upper),
    (0x2107, 0x2107, Upper),
    (0x210A, 0x210A, Lower),
    (0x210B, 0x210D, Upper),
    (0x210E, 0x210F, Lower),
    (0x2110, 0x2112, Upper),
    (0x2113, 0x2113, Lower),
    (0x2115, 0x2115, Upper),
    (0x2119, 0x211D, Upper),
    (0x2124, 0x2124, Upper),
    (0x2126, 0x2126, Upper),
    (0x2128, 0x2128, Upper),
    (0x212A, 0x212D, Upper),
    (0x212F, 0x212F, Lower),
    (0x2130, 0x2133, Upper),
    (0x2134, 0x2134, Lower),
    (0x2135, 0x2138, OLetter),
    (0x2139, 0x2139, Lower),
    (0x213C, 0x213D, Lower),
    (0x213E, 0x213F, Upper),
    (0x2145, 0x2145, Upper),
    (0x2146, 0x2149, Lower),
    (0x214E, 0x214E, Lower),
    (0x2160, 0x216F, Upper),
    (0x2170, 0x217F, Lower),
    (0x2180, 0x2182, OLetter),
    (0x2183, 0x2183, Upper),
    (0x2184, 0x2184, Lower),
    (0x2185, 0x2188, OLetter),
    (0x2308, 0x230B, Close),
    (0x2329, 0x232A, Close),
    (0x24B6, 0x24CF, Upper),
    (0x24D0, 0x24E9, Lower),
    (0x275B, 0x2760, Close),
    (0x2768, 0x2775, Close),
    (0x27C5, 0x27C6, Close),
    (0x27E6, 0x27EF, Close),
    (0x2983, 0x2998, Close),
    (0x29D8, 0x29DB, Close),
    (0x29FC, 0x29FD, Close),
    (0x2C00, 0x2C2F, Upper),
    (0x2C30, 0x2C5F, Lower),
    (0x2C60, 0x2C60, Upper),
    (0x2C61, 0x2C61, Lower),
    (0x2C62, 0x2C64, Upper),
    (0x2C65, 0x2C66, Lower),
    (0x2C67, 0x2C67, Upper),
    (0x2C68, 0x2C68, Lower),
    (0x2C69, 0x2C69, Upper),
    (0x2C6A, 0x2C6A, Lower),
    (0x2C6B, 0x2C6B, Upper),
    (0x2C6C, 0x2C6C, Lower),
    (0x2C6D, 0x2C70, Upper),
    (0x2C71, 0x2C71, Lower),
    (0x2C72, 0x2C72, Upper),
    (0x2C73, 0x2C74, Lower),
    (0x2C75, 0x2C75, Upper),
    (0x2C76, 0x2C7D, Lower),
    (0x2C7E, 0x2C80, Upper),
    (0x2C81, 0x2C81, Lower),
    (0x2C82, 0x2C82, Upper),
    (0x2C83, 0x2C83, Lower),
    (0x2C84, 0x2C84, Upper),
    (0x2C85, 0x2C85, Lower),
    (0x2C86, 0x2C86, Upper),
    (0x2C87, 0x2C87, Lower),
    (0x2C88, 0x2C88, Upper),
    (0x2C89, 0x2C89, Lower),
    (0x2C8A, 0x2C8A, Upper),
    (0x2C8B, 0x2C8B, Lower),
    (0x2C8C, 0x2C8C, Upper),
    (0x2C8D, 0x2C8D, Lower),
    (0x2C8E, 0x2C8E, Upper),
    (0x2C8F, 0x2C8F, Lower),
    (0x2C90, 0x2C90, Upper),
    (0x2C91, 0x2C91, Lower),
    (0x2C92, 0x2C92, Upper),
    (0x2C93, 0x2C93, Lower),
    (0x2C94, 0x2C94, Upper),
    (0x2C95, 0x2C95, Lower),
    (0x2C96, 0x2C96, Upper),
    (0x2C97, 0x2C97, Lower),
    (0x2C98, 0x2C98, Upper),
    (0x2C99, 0x2C99, Lower),
    (0x2C9A, 0x2C9A, Upper),
    (0x2C9B, 0x2C9B, Lower),
    (0x2C9C, 0x2C9C, Upper),
    (0x2C9D, 0x2C9D, Lower),
    (0x2C9E, 0x2C9E, Upper),
    (0x2C9F, 0x2C9F, Lower),
    (0x2CA0, 0x2CA0, Upper),
    (0x2CA1, 0x2CA1, Lower),
    (0x2CA2, 0x2CA2, Upper),
    (0x2CA3, 0x2CA3, Lower),
    (0x2CA4, 0x2CA4, Upper),
    (0x2CA5, 0x2CA5, Lower),
    (0x2CA6, 0x2CA6, Upper),
    (0x2CA7, 0x2CA7, Lower),
    (0x2CA8, 0x2CA8, Upper),
    (0x2CA9, 0x2CA9, Lower),
    (0x2CAA, 0x2CAA, Upper),
    (0x2CAB, 0x2CAB, Lower),
    (0x2CAC, 0x2CAC, Upper),
    (0x2CAD, 0x2CAD, Lower),
    (0x2CAE, 0x2CAE, Upper),
    (0x2CAF, 0x2CAF, Lower),
    (0x2CB0, 0x2CB0, Upper),
    (0x2CB1, 0x2CB1, Lower),
    (0x2CB2, 0x2CB2, Upper),
    (0x2CB3, 0x2CB3, Lower),
    (0x2CB4, 0x2CB4, Upper),
    (0x2CB5, 0x2CB5, Lower),
    (0x2CB6, 0x2CB6, Upper),
    (0x2CB7, 0x2CB7, Lower),
    (0x2CB8, 0x2CB8, Upper),
    (0x2CB9, 0x2CB9, Lower),
    (0x2CBA, 0x2CBA, Upper),
    (0x2CBB, 0x2CBB, Lower),
    (0x2CBC, 0x2CBC, Upper),
    (0x2CBD, 0x2CBD, Lower),
    (0x2CBE, 0x2CBE, Upper),
    (0x2CBF, 0x2CBF, Lower),
    (0x2CC0, 0x2CC0, Upper),
    (0x2CC1, 0x2CC1, Lower),
    (0x2CC2, 0x2CC2, Upper),
    (0x2CC3, 0x2CC3, Lower),
    (0x2CC4, 0x2CC4, Upper),
    (0x2CC5, 0x2CC5, Lower),
    (0x2CC6, 0x2CC6, Upper),
    (0x2CC7, 0x2CC7, Lower),
    (0x2CC8, 0x2CC8, Upper),
    (0x2CC9, 0x2CC9, Lower),
    (0x2CCA, 0x2CCA, Upper),
    (0x2CCB, 0x2CCB, Lower),
    (0x2CCC, 0x2CCC, Upper),
    (0x2CCD, 0x2CCD, Lower),
    (0x2CCE, 0x2CCE, Upper),
    (0x2CCF, 0x2CCF, Lower),
    (0x2CD0, 0x2CD0, Upper),
    (0x2CD1, 0x2CD1, Lower),
    (0x2CD2, 0x2CD2, Upper),
    (0x2CD3, 0x2CD3, Lower),
    (0x2CD4, 0x2CD4, Upper),
    (0x2CD5, 0x2CD5, Lower),
    (0x2CD6, 0x2CD6, Upper),
    (0x2CD7, 0x2CD7, Lower),
    (0x2CD8, 0x2CD8, Upper),
    (0x2CD9, 0x2CD9, Lower),
    (0x2CDA, 0x2CDA, Upper),
    (0x2CDB, 0x2CDB, Lower),
    (0x2CDC, 0x2CDC, Upper),
    (0x2CDD, 0x2CDD, Lower),
    (0x2CDE, 0x2CDE, Upper),
    (0x2CDF, 0x2CDF, Lower),
    (0x2CE0, 0x2CE0, Upper),
    (0x2CE1, 0x2CE1, Lower),
    (0x2CE2, 0x2CE2, Upper),
    (0x2CE3, 0x2CE4, Lower),
    (0x2CEB, 0x2CEB, Upper),
    (0x2CEC, 0x2CEC, Lower),
    (0x2CED, 0x2CED, Upper),
    (0x2CEE, 0x2CEE, Lower),
    (0x2CEF, 0x2CF1, Extend),
    (0x2CF2, 0x2CF2, Upper),
    (0x2CF3, 0x2CF3, Lower),
    (0x2CF9, 0x2CFB, STerm),
    (0x2D00, 0x2D25, Lower),
    (0x2D27, 0x2D27, Lower),
    (0x2D2D, 0x2D2D, Lower),
    (0x2D30, 0x2D67, OLetter),
    (0x2D6F, 0x2D6F, OLetter),
    (0x2D7F, 0x2D7F, Extend),
    (0x2D80, 0x2D96, OLetter),
    (0x2DA0, 0x2DA6, OLetter),
    (0x2DA8, 0x2DAE, OLetter),
    (0x2DB0, 0x2DB6, OLetter),
    (0x2DB8, 0x2DBE, OLetter),
    (0x2DC0, 0x2DC6, OLetter),
    (0x2DC8, 0x2DCE, OLetter),
    (0x2DD0, 0x2DD6, OLetter),
    (0x2DD8, 0x2DDE, OLetter),
    (0x2DE0, 0x2DFF, Extend),
    (0x2E00, 0x2E0D, Close),
    (0x2E1C, 0x2E1D, Close),
    (0x2E20, 0x2E29, Close),
    (0x2E2E, 0x2E2E, STerm),
    (0x2E2F, 0x2E2F, OLetter),
    (0x2E3C, 0x2E3C, STerm),
    (0x2E42, 0x2E42, Close),
    (0x2E53, 0x2E54, STerm),
    (0x2E55, 0x2E5C, Close),
    (0x3000, 0x3000, Sp),
    (0x3001, 0x3001, SContinue),
    (0x3002, 0x3002, STerm),
    (0x3005, 0x3007, OLetter),
    (0x3008, 0x3011, Close),
    (0x3014, 0x301B, Close),
    (0x301D, 0x301F, Close),
    (0x3021, 0x3029, OLetter),
    (0x302A, 0x302F, Extend),
    (0x3031, 0x3035, OLetter),
    (0x3038, 0x303C, OLetter),
    (0x3041, 0x3096, OLetter),
    (0x3099, 0x309A, Extend),
    (0x309D, 0x309F, OLetter),
    (0x30A1, 0x30FA, OLetter),
    (0x30FC, 0x30FF, OLetter),
    (0x3105, 0x312F, OLetter),
    (0x3131, 0x318E, OLetter),
    (0x31A0, 0x31BF, OLetter),
    (0x31F0, 0x31FF, OLetter),
    (0x3400, 0x4DBF, OLetter),
    (0x4E00, 0xA48C, OLetter),
    (0xA4D0, 0xA4FD, OLetter),
    (0xA4FF, 0xA4FF, STerm),
    (0xA500, 0xA60C, OLetter),
    (0xA60E, 0xA60F, STerm),
    (0xA610, 0xA61F, OLetter),
    (0xA620, 0xA629, Numeric),
    (0xA62A, 0xA62B, OLetter),
    (0xA640, 0xA640, Upper),
    (0xA641, 0xA641, Lower),
    (0xA642, 0xA642, Upper),
    (0xA643, 0xA643, Lower),
    (0xA644, 0xA644, Upper),
    (0xA645, 0xA645, Lower),
    (0xA646, 0xA646, Upper),
    (0xA647, 0xA647, Lower),
    (0xA648, 0xA648, Upper),
    (0xA649, 0xA649, Lower),
    (0xA64A, 0xA64A, Upper),
    (0xA64B, 0xA64B, Lower),
    (0xA64C, 0xA64C, Upper),
    (0xA64D, 0xA64D, Lower),
    (0xA64E, 0xA64E, Upper),
    (0xA64F, 0xA64F, Lower),
    (0xA650, 0xA650, Upper),
    (0xA651, 0xA651, Lower),
    (0xA652, 0xA652, Upper),
    (0xA653, 0xA653, Lower),
    (0xA654, 0xA654, Upper),
    (0xA655, 0xA655, Lower),
    (0xA656, 0xA656, Upper),
    (0xA657, 0xA657, Lower),
    (0xA658, 0xA658, Upper),
    (0xA659, 0xA659, Lower),
    (0xA65A, 0xA65A, Upper),
    (0xA65B, 0xA65B, Lower),
    (0xA65C, 0xA65C, Upper),
    (0xA65D, 0xA65D, Lower),
    (0xA65E, 0xA65E, Upper),
    (0xA65F, 0xA65F, Lower),
    (0xA660, 0xA660, Upper),
    (0xA661, 0xA661, Lower),
    (0xA662, 0xA662, Upper),
    (0xA663, 0xA663, Lower),
    (0xA664, 0xA664, Upper),
    (0xA665, 0xA665, Lower),
    (0xA666, 0xA666, Upper),
    (0xA667, 0xA667, Lower),
    (0xA668, 0xA668, Upper),
    (0xA669, 0xA669, Lower),
    (0xA66A, 0xA66A, Upper),
    (0xA66B, 0xA66B, Lower),
    (0xA66C, 0xA66C, Upper),
    (0xA66D, 0xA66D, Lower),
    (0xA66E, 0xA66E, OLetter),
    (0xA66F, 0xA672, Extend),
    (0xA674, 0xA67D, Extend),
    (0xA67F, 0xA67F, OLetter),
    (0xA680, 0xA680, Upper),
    (0xA681, 0xA681, Lower),
    (0xA682, 0xA682, Upper),
    (0xA683, 0xA683, Lower),
    (0xA684, 0xA684, Upper),
    (0xA685, 0xA685, Lower),
    (0xA686, 0xA686, Upper),
    (0xA687, 0xA687, Lower),
    (0xA688, 0xA688, Upper),
    (0xA689, 0xA689, Lower),
    (0xA68A, 0xA68A, Upper),
    (0xA68B, 0xA68B, Lower),
    (0xA68C, 0xA68C, Upper),
    (0xA68D, 0xA68D, Lower),
    (0xA68E, 0xA68E, Upper),
    (0xA68F, 0xA68F, Lower),
    (0xA690, 0xA690, Upper),
    (0xA691, 0xA691, Lower),
    (0xA692, 0xA692, Upper),
    (0xA693, 0xA693, Lower),
    (0xA694, 0xA694, Upper),
    (0xA695, 0xA695, Lower),
    (0xA696, 0xA696, Upper),
    (0xA697, 0xA697, Lower),
    (0xA698, 0xA698, Upper),
    (0xA699, 0xA699, Lower),
    (0xA69A, 0xA69A, Upper),
    (0xA69B, 0xA69D, Lower),
    (0xA69E, 0xA69F, Extend),
    (0xA6A0, 0xA6EF, OLetter),
    (0xA6F0, 0xA6F1, Extend),
    (0xA6F3, 0xA6F3, STerm),
    (0xA6F7, 0xA6F7, STerm),
    (0xA717, 0xA71F, OLetter),
    (0xA722, 0xA722, Upper),
    (0xA723, 0xA723, Lower),
    (0xA724, 0xA724, Upper),
    (0xA725, 0xA725, Lower),
    (0xA726, 0xA726, Upper),
    (0xA727, 0xA727, Lower),
    (0xA728, 0xA728, Upper),
    (0xA729, 0xA729, Lower),
    (0xA72A, 0xA72A, Upper),
    (0xA72B, 0xA72B, Lower),
    (0xA72C, 0xA72C, Upper),
    (0xA72D, 0xA72D, Lower),
    (0xA72E, 0xA72E, Upper),
    (0xA72F, 0xA731, Lower),
    (0xA732, 0xA732, Upper),
    (0xA733, 0xA733, Lower),
    (0xA734, 0xA734, Upper),
    (0xA735, 0xA735, Lower),
    (0xA736, 0xA736, Upper),
    (0xA737, 0xA737, Lower),
    (0xA738, 0xA738, Upper),
    (0xA739, 0xA739, Lower),
    (0xA73A, 0xA73A, Upper),
    (0xA73B, 0xA73B, Lower),
    (0xA73C, 0xA73C, Upper),
    (0xA73D, 0xA73D, Lower),
    (0xA73E, 0xA73E, Upper),
    (0xA73F, 0xA73F, Lower),
    (0xA740, 0xA740, Upper),
    (0xA741, 0xA741, Lower),
    (0xA742, 0xA742, Upper),
    (0xA743, 0xA743, Lower),
    (0xA744, 0xA744, Upper),
    (0xA745, 0xA745, Lower),
    (0xA746, 0xA746, Upper),
    (0xA747, 0xA747, Lower),
    (0xA748, 0xA748, Upper),
    (0xA749, 0xA749, Lower),
    (0xA74A, 0xA74A, Upper),
    (0xA74B, 0xA74B, Lower),
    (0xA74C, 0xA74C, Upper),
    (0xA74D, 0xA74D, Lower),
    (0xA74E, 0xA74E, Upper),
    (0xA74F, 0xA74F, Lower),
    (0xA750, 0xA750, Upper),
    (0xA751, 0xA751, Lower),
    (0xA752, 0xA752, Upper),
    (0xA753, 0xA753, Lower),
    (0xA754, 0xA754, Upper),
    (0xA755, 0xA755, Lower),
    (0xA756, 0xA756, Upper),
    (0xA757, 0xA757, Lower),
    (0xA758, 0xA758, Upper),
    (0xA759, 0xA759, Lower),
    (0xA75A, 0xA75A, Upper),
    (0xA75B, 0xA75B, Lower),
    (0xA75C, 0xA75C, Upper),
    (0xA75D, 0xA75D, Lower),
    (0xA75E, 0xA75E, Upper),
    (0xA75F, 0xA75F, Lower),
    (0xA760, 0xA760, Upper),
    (0xA761, 0xA761, Lower),
    (0xA762, 0xA762, Upper),
    (0xA763, 0xA763, Lower),
    (0xA764, 0xA764, Upper),
    (0xA765, 0xA765, Lower),
    (0xA766, 0xA766, Upper),
    (0xA767, 0xA767, Lower),
    (0xA768, 0xA768, Upper),
    (0xA769, 0xA769, Lower),
    (0xA76A, 0xA76A, Upper),
    (0xA76B, 0xA76B, Lower),
    (0xA76C, 0xA76C, Upper),
    (0xA76D, 0xA76D, Lower),
    (0xA76E, 0xA76E, Upper),
    (0xA76F, 0xA778, Lower),
    (0xA779, 0xA779, Upper),
    (0xA77A, 0xA77A, Lower),
    (0xA77B, 0xA77B, Upper),
    (0xA77C, 0xA77C, Lower),
    (0xA77D, 0xA77E, Upper),
    (0xA77F, 0xA77F, Lower),
    (0xA780, 0xA780, Upper),
    (0xA781, 0xA781, Lower),
    (0xA782, 0xA782, Upper),
    (0xA783, 0xA783, Lower),
    (0xA784, 0xA784, Upper),
    (0xA785, 0xA785, Lower),
    (0xA786, 0xA786, Upper),
    (0xA787, 0xA787, Lower),
    (0xA788, 0xA788, OLetter),
    (0xA78B, 0xA78B, Upper),
    (0xA78C, 0xA78C, Lower),
    (0xA78D, 0xA78D, Upper),
    (0xA78E, 0xA78E, Lower),
    (0xA78F, 0xA78F, OLetter),
    (0xA790, 0xA790, Upper),
    (0xA791, 0xA791, Lower),
    (0xA792, 0xA792, Upper),
    (0xA793, 0xA795, Lower),
    (0xA796, 0xA796, Upper),
    (0xA797, 0xA797, Lower),
    (0xA798, 0xA798, Upper),
    (0xA799, 0xA799, Lower),
    (0xA79A, 0xA79A, Upper),
    (0xA79B, 0xA79B, Lower),
    (0xA79C, 0xA79C, Upper),
    (0xA79D, 0xA79D, Lower),
    (0xA79E, 0xA79E, Upper),
    (0xA79F, 0xA79F, Lower),
    (0xA7A0, 0xA7A0, Upper),
    (0xA7A1, 0xA7A1, Lower),
    (0xA7A2, 0xA7A2, Upper),
    (0xA7A3, 0xA7A3, Lower),
    (0xA7A4, 0xA7A4, Upper),
    (0xA7A5, 0xA7A5, Lower),
    (0xA7A6, 0xA7A6, Upper),
    (0xA7A7, 0xA7A7, Lower),
    (0xA7A8, 0xA7A8, Upper),
    (0xA7A9, 0xA7A9, Lower),
    (0xA7AA, 0xA7AE, Upper),
    (0xA7AF, 0xA7AF, Lower),
    (0xA7B0, 0xA7B4, Upper),
    (0xA7B5, 0xA7B5, Lower),
    (0xA7B6, 0xA7B6, Upper),
    (0xA7B7, 0xA7B7, Lower),
    (0xA7B8, 0xA7B8, Upper),
    (0xA7B9, 0xA7B9, Lower),
    (0xA7BA, 0xA7BA, Upper),
    (0xA7BB, 0xA7BB, Lower),
    (0xA7BC, 0xA7BC, Upper),
    (0xA7BD, 0xA7BD, Lower),
    (0xA7BE, 0xA7BE, Upper),
    (0xA7BF, 0xA7BF, Lower),
    (0xA7C0, 0xA7C0, Upper),
    (0xA7C1, 0xA7C1, Lower),
    (0xA7C2, 0xA7C2, Upper),
    (0xA7C3, 0xA7C3, Lower),
    (0xA7C4, 0xA7C7, Upper),
    (0xA7C8, 0xA7C8, Lower),
    (0xA7C9, 0xA7C9, Upper),
    (0xA7CA, 0xA7CA, Lower),
    (0xA7CB, 0xA7CC, Upper),
    (0xA7CD, 0xA7CD, Lower),
    (0xA7CE, 0xA7CE, Upper),
    (0xA7CF, 0xA7CF, Lower),
    (0xA7D0, 0xA7D0, Upper),
    (0xA7D1, 0xA7D1, Lower),
    (0xA7D2, 0xA7D2, Upper),
    (0xA7D3, 0xA7D3, Lower),
    (0xA7D4, 0xA7D4, Upper),
    (0xA7D5, 0xA7D5, Lower),
    (0xA7D6, 0xA7D6, Upper),
    (0xA7D7, 0xA7D7, Lower),
    (0xA7D8, 0xA7D8, Upper),
    (0xA7D9, 0xA7D9, Lower),
    (0xA7DA, 0xA7DA, Upper),
    (0xA7DB, 0xA7DB, Lower),
    (0xA7DC, 0xA7DC, Upper),
    (0xA7F1, 0xA7F4, Lower),
    (0xA7F5, 0xA7F5, Upper),
    (0xA7F6, 0xA7F6, Lower),
    (0xA7F7, 0xA7F7, OLetter),
    (0xA7F8, 0xA7FA, Lower),
    (0xA7FB, 0xA801, OLetter),
    (0xA802, 0xA802, Extend),
    (0xA803, 0xA805, OLetter),
    (0xA806, 0xA806, Extend),
    (0xA807, 0xA80A, OLetter),
    (0xA80B, 0xA80B, Extend),
    (0xA80C, 0xA822, OLetter),
    (0xA823, 0xA827, Extend),
    (0xA82C, 0xA82C, Extend),
    (0xA840, 0xA873, OLetter),
    (0xA876, 0xA877, STerm),
    (0xA880, 0xA881, Extend),
    (0xA882, 0xA8B3, OLetter),
    (0xA8B4, 0xA8C5, Extend),
    (0xA8CE, 0xA8CF, STerm),
    (0xA8D0, 0xA8D9, Numeric),
    (0xA8E0, 0xA8F1, Extend),
    (0xA8F2, 0xA8F7, OLetter),
    (0xA8FB, 0xA8FB, OLetter),
    (0xA8FD, 0xA8FE, OLetter),
    (0xA8FF, 0xA8FF, Extend),
    (0xA900, 0xA909, Numeric),
    (0xA90A, 0xA925, OLetter),
    (0xA926, 0xA92D, Extend),
    (0xA92F, 0xA92F, STerm),
    (0xA930, 0xA946, OLetter),
    (0xA947, 0xA953, Extend),
    (0xA960, 0xA97C, OLetter),
    (0xA980, 0xA983, Extend),
    (0xA984, 0xA9B2, OLetter),
    (0xA9B3, 0xA9C0, Extend),
    (0xA9C8, 0xA9C9, STerm),
    (0xA9CF, 0xA9CF, OLetter),
    (0xA9D0, 0xA9D9, Numeric),
    (0xA9E0, 0xA9E4, OLetter),
    (0xA9E5, 0xA9E5, Extend),
    (0xA9E6, 0xA9EF, OLetter),
    (0xA9F0, 0xA9F9, Numeric),
    (0xA9FA, 0xA9FE, OLetter),
    (0xAA00, 0xAA28, OLetter),
    (0xAA29, 0xAA36, Extend),
    (0xAA40, 0xAA42, OLetter),
    (0xAA43, 0xAA43, Extend),
    (0xAA44, 0xAA4B, OLetter),
    (0xAA4C, 0xAA4D, Extend),
    (0xAA50, 0xAA59, Numeric),
    (0xAA5D, 0xAA5F, STerm),
    (0xAA60, 0xAA76, OLetter),
    (0xAA7A, 0xAA7A, OLetter),
    (0xAA7B, 0xAA7D, Extend),
    (0xAA7E, 0xAAAF, OLetter),
    (0xAAB0, 0xAAB0, Extend),
    (0xAAB1, 0xAAB1, OLetter),
    (0xAAB2, 0xAAB4, Extend),
    (0xAAB5, 0xAAB6, OLetter),
    (0xAAB7, 0xAAB8, Extend),
    (0xAAB9, 0xAABD, OLetter),
    (0xAABE, 0xAABF, Extend),
    (0xAAC0, 0xAAC0, OLetter),
    (0xAAC1, 0xAAC1, Extend),
    (0xAAC2, 0xAAC2, OLetter),
    (0xAADB, 0xAADD, OLetter),
    (0xAAE0, 0xAAEA, OLetter),
    (0xAAEB, 0xAAEF, Extend),
    (0xAAF0, 0xAAF1, STerm),
    (0xAAF2, 0xAAF4, OLetter),
    (0xAAF5, 0xAAF6, Extend),
    (0xAB01, 0xAB06, OLetter),
    (0xAB09, 0xAB0E, OLetter),
    (0xAB11, 0xAB16, OLetter),
    (0xAB20, 0xAB26, OLetter),
    (0xAB28, 0xAB2E, OLetter),
    (0xAB30, 0xAB5A, Lower),
    (0xAB5C, 0xAB69, Lower),
    (0xAB70, 0xABBF, Lower),
    (0xABC0, 0xABE2, OLetter),
    (0xABE3, 0xABEA, Extend),
    (0xABEB, 0xABEB, STerm),
    (0xABEC, 0xABED, Extend),
    (0xABF0, 0xABF9, Numeric),
    (0xAC00, 0xD7A3, OLetter),
    (0xD7B0, 0xD7C6, OLetter),
    (0xD7CB, 0xD7FB, OLetter),
    (0xF900, 0xFA6D, OLetter),
    (0xFA70, 0xFAD9, OLetter),
    (0xFB00, 0xFB06, Lower),
    (0xFB13, 0xFB17, Lower),
    (0xFB1D, 0xFB1D, OLetter),
    (0xFB1E, 0xFB1E, Extend),
    (0xFB1F, 0xFB28, OLetter),
    (0xFB2A, 0xFB36, OLetter),
    (0xFB38, 0xFB3C, OLetter),
    (0xFB3E, 0xFB3E, OLetter),
    (0xFB40, 0xFB41, OLetter),
    (0xFB43, 0xFB44, OLetter),
    (0xFB46, 0xFBB1, OLetter),
    (0xFBD3, 0xFD3D, OLetter),
    (0xFD3E, 0xFD3F, Close),
    (0xFD50, 0xFD8F, OLetter),
    (0xFD92, 0xFDC7, OLetter),
    (0xFDF0, 0xFDFB, OLetter),
    (0xFE00, 0xFE0F, Extend),
    (0xFE10, 0xFE11, SContinue),
    (0xFE12, 0xFE12, STerm),
    (0xFE13, 0xFE14, SContinue),
    (0xFE15, 0xFE16, STerm),
    (0xFE17, 0xFE18, Close),
    (0xFE20, 0xFE2F, Extend),
    (0xFE31, 0xFE32, SContinue),
    (0xFE35, 0xFE44, Close),
    (0xFE47, 0xFE48, Close),
    (0xFE50, 0xFE51, SContinue),
    (0xFE52, 0xFE52, ATerm),
    (0xFE54, 0xFE55, SContinue),
    (0xFE56, 0xFE57, STerm),
    (0xFE58, 0xFE58, SContinue),
    (0xFE59, 0xFE5E, Close),
    (0xFE63, 0xFE63, SContinue),
    (0xFE70, 0xFE74, OLetter),
    (0xFE76, 0xFEFC, OLetter),
    (0xFEFF, 0xFEFF, Format),
    (0xFF01, 0xFF01, STerm),
    (0xFF08, 0xFF09, Close),
    (0xFF0C, 0xFF0D, SContinue),
    (0xFF0E, 0xFF0E, ATerm),
    (0xFF10, 0xFF19, Numeric),
    (0xFF1A, 0xFF1B, SContinue),
    (0xFF1F, 0xFF1F, STerm),
    (0xFF21, 0xFF3A, Upper),
    (0xFF3B, 0xFF3B, Close),
    (0xFF3D, 0xFF3D, Close),
    (0xFF41, 0xFF5A, Lower),
    (0xFF5B, 0xFF5B, Close),
    (0xFF5D, 0xFF5D, Close),
    (0xFF5F, 0xFF60, Close),
    (0xFF61, 0xFF61, STerm),
    (0xFF62, 0xFF63, Close),
    (0xFF64, 0xFF64, SContinue),
    (0xFF66, 0xFF9D, OLetter),
    (0xFF9E, 0xFF9F, Extend),
    (0xFFA0, 0xFFBE, OLetter),
    (0xFFC2, 0xFFC7, OLetter),
    (0xFFCA, 0xFFCF, OLetter),
    (0xFFD2, 0xFFD7, OLetter),
    (0xFFDA, 0xFFDC, OLetter),
    (0xFFF9, 0xFFFB, Format),
    (0x10000, 0x1000B, OLetter),
    (0x1000D, 0x10026, OLetter),
    (0x10028, 0x1003A, OLetter),
    (0x1003C, 0x1003D, OLetter),
    (0x1003F, 0x1004D, OLetter),
    (0x10050, 0x1005D, OLetter),
    (0x10080, 0x100FA, OLetter),
    (0x10140, 0x10174, OLetter),
    (0x101FD, 0x101FD, Extend),
    (0x10280, 0x1029C, OLetter),
    (0x102A0, 0x102D0, OLetter),
    (0x102E0, 0x102E0, Extend),
    (0x10300, 0x1031F, OLetter),
    (0x1032D, 0x1034A, OLetter),
    (0x10350, 0x10375, OLetter),
    (0x10376, 0x1037A, Extend),
    (0x10380, 0x1039D, OLetter),
    (0x103A0, 0x103C3, OLetter),
    (0x103C8, 0x103CF, OLetter),
    (0x103D1, 0x103D5, OLetter),
    (0x10400, 0x10427, Upper),
    (0x10428, 0x1044F, Lower),
    (0x10450, 0x1049D, OLetter),
    (0x104A0, 0x104A9, Numeric),
    (0x104B0, 0x104D3, Upper),
    (0x104D8, 0x104FB, Lower),
    (0x10500, 0x10527, OLetter),
    (0x10530, 0x10563, OLetter),
    (0x10570, 0x1057A, Upper),
    (0x1057C, 0x1058A, Upper),
    (0x1058C, 0x10592, Upper),
    (0x10594, 0x10595, Upper),
    (0x10597, 0x105A1, Lower),
    (0x105A3, 0x105B1, Lower),
    (0x105B3, 0x105B9, Lower),
    (0x105BB, 0x105BC, Lower),
    (0x105C0, 0x105F3, OLetter),
    (0x10600, 0x10736, OLetter),
    (0x10740, 0x10755, OLetter),
    (0x10760, 0x10767, OLetter),
    (0x10780, 0x10780, Lower),
    (0x10781, 0x10782, OLetter),
    (0x10783, 0x10785, Lower),
    (0x10787, 0x107B0, Lower),
    (0x107B2, 0x107BA, Lower),
    (0x10800, 0x10805, OLetter),
    (0x10808, 0x10808, OLetter),
    (0x1080A, 0x10835, OLetter),
    (0x10837, 0x10838, OLetter),
    (0x1083C, 0x1083C, OLetter),
    (0x1083F, 0x10855, OLetter),
    (0x10860, 0x10876, OLetter),
    (0x10880, 0x1089E, OLetter),
    (0x108E0, 0x108F2, OLetter),
    (0x108F4, 0x108F5, OLetter),
    (0x10900, 0x10915, OLetter),
    (0x10920, 0x10939, OLetter),
    (0x10940, 0x10959, OLetter),
    (0x10980, 0x109B7, OLetter),
    (0x109BE, 0x109BF, OLetter),
    (0x10A00, 0x10A00, OLetter),
    (0x10A01, 0x10A03, Extend),
    (0x10A05, 0x10A06, Extend),
    (0x10A0C, 0x10A0F, Extend),
    (0x10A10, 0x10A13, OLetter),
    (0x10A15, 0x10A17, OLetter),
    (0x10A19, 0x10A35, OLetter),
    (0x10A38, 0x10A3A, Extend),
    (0x10A3F, 0x10A3F, Extend),
    (0x10A56, 0x10A57, STerm),
    (0x10A60, 0x10A7C, OLetter),
    (0x10A80, 0x10A9C, OLetter),
    (0x10AC0, 0x10AC7, OLetter),
    (0x10AC9, 0x10AE4, OLetter),
    (0x10AE5, 0x10AE6, Extend),
    (0x10B00, 0x10B35, OLetter),
    (0x10B40, 0x10B55, OLetter),
    (0x10B60, 0x10B72, OLetter),
    (0x10B80, 0x10B91, OLetter),
    (0x10C00, 0x10C48, OLetter),
    (0x10C80, 0x10CB2, Upper),
    (0x10CC0, 0x10CF2, Lower),
    (0x10D00, 0x10D23, OLetter),
    (0x10D24, 0x10D27, Extend),
    (0x10D30, 0x10D39, Numeric),
    (0x10D40, 0x10D49, Numeric),
    (0x10D4A, 0x10D4F, OLetter),
    (0x10D50, 0x10D65, Upper),
    (0x10D69, 0x10D6D, Extend),
    (0x10D6F, 0x10D6F, OLetter),
    (0x10D70, 0x10D85, Lower),
    (0x10E80, 0x10EA9, OLetter),
    (0x10EAB, 0x10EAC, Extend),
    (0x10EB0, 0x10EB1, OLetter),
    (0x10EC2, 0x10EC7, OLetter),
    (0x10EFA, 0x10EFF, Extend),
    (0x10F00, 0x10F1C, OLetter),
    (0x10F27, 0x10F27, OLetter),
    (0x10F30, 0x10F45, OLetter),
    (0x10F46, 0x10F50, Extend),
    (0x10F55, 0x10F59, STerm),
    (0x10F70, 0x10F81, OLetter),
    (0x10F82, 0x10F85, Extend),
    (0x10F86, 0x10F89, STerm),
    (0x10FB0, 0x10FC4, OLetter),
    (0x10FE0, 0x10FF6, OLetter),
    (0x11000, 0x11002, Extend),
    (0x11003, 0x11037, OLetter),
    (0x11038, 0x11046, Extend),
    (0x11047, 0x11048, STerm),
    (0x11066, 0x1106F, Numeric),
    (0x11070, 0x11070, Extend),
    (0x11071, 0x11072, OLetter),
    (0x11073, 0x11074, Extend),
    (0x11075, 0x11075, OLetter),
    (0x1107F, 0x11082, Extend),
    (0x11083, 0x110AF, OLetter),
    (0x110B0, 0x110BA, Extend),
    (0x110BD, 0x110BD, Numeric),
    (0x110BE, 0x110C1, STerm),
    (0x110C2, 0x110C2, Extend),
    (0x110CD, 0x110CD, Numeric),
    (0x110D0, 0x110E8, OLetter),
    (0x110F0, 0x110F9, Numeric),
    (0x11100, 0x11102, Extend),
    (0x11103, 0x11126, OLetter),
    (0x11127, 0x11134, Extend),
    (0x11136, 0x1113F, Numeric),
    (0x11141, 0x11143, STerm),
    (0x11144, 0x11144, OLetter),
    (0x11145, 0x11146, Extend),
    (0x11147, 0x11147, OLetter),
    (0x11150, 0x11172, OLetter),
    (0x11173, 0x11173, Extend),
    (0x11176, 0x11176, OLetter),
    (0x11180, 0x11182, Extend),
    (0x11183, 0x111B2, OLetter),
    (0x111B3, 0x111C0, Extend),
    (0x111C1, 0x111C4, OLetter),
    (0x111C5, 0x111C6, STerm),
    (0x111C9, 0x111CC, Extend),
    (0x111CD, 0x111CD, STerm),
    (0x111CE, 0x111CF, Extend),
    (0x111D0, 0x111D9, Numeric),
    (0x111DA, 0x111DA, OLetter),
    (0x111DC, 0x111DC, OLetter),
    (0x111DE, 0x111DF, STerm),
    (0x11200, 0x11211, OLetter),
    (0x11213, 0x1122B, OLetter),
    (0x1122C, 0x11237, Extend),
    (0x11238, 0x11239, STerm),
    (0x1123B, 0x1123C, STerm),
    (0x1123E, 0x1123E, Extend),
    (0x1123F, 0x11240, OLetter),
    (0x11241, 0x11241, Extend),
    (0x11280, 0x11286, OLetter),
    (0x11288, 0x11288, OLetter),
    (0x1128A, 0x1128D, OLetter),
    (0x1128F, 0x1129D, OLetter),
    (0x1129F, 0x112A8, OLetter),
    (0x112A9, 0x112A9, STerm),
    (0x112B0, 0x112DE, OLetter),
    (0x112DF, 0x112EA, Extend),
    (0x112F0, 0x112F9, Numeric),
    (0x11300, 0x11303, Extend),
    (0x11305, 0x1130C, OLetter),
    (0x1130F, 0x11310, OLetter),
    (0x11313, 0x11328, OLetter),
    (0x1132A, 0x11330, OLetter),
    (0x11332, 0x11333, OLetter),
    (0x11335, 0x11339, OLetter),
    (0x1133B, 0x1133C, Extend),
    (0x1133D, 0x1133D, OLetter),
    (0x1133E, 0x11344, Extend),
    (0x11347, 0x11348, Extend),
    (0x1134B, 0x1134D, Extend),
    (0x11350, 0x11350, OLetter),
    (0x11357, 0x11357, Extend),
    (0x1135D, 0x11361, OLetter),
    (0x11362, 0x11363, Extend),
    (0x11366, 0x1136C, Extend),
    (0x11370, 0x11374, Extend),
    (0x11380, 0x11389, OLetter),
    (0x1138B, 0x1138B, OLetter),
    (0x1138E, 0x1138E, OLetter),
    (0x11390, 0x113B5, OLetter),
    (0x113B7, 0x113B7, OLetter),
    (0x113B8, 0x113C0, Extend),
    (0x113C2, 0x113C2, Extend),
    (0x113C5, 0x113C5, Extend),
    (0x113C7, 0x113CA, Extend),
    (0x113CC, 0x113D0, Extend),
    (0x113D1, 0x113D1, OLetter),
    (0x113D2, 0x113D2, Extend),
    (0x113D3, 0x113D3, OLetter),
    (0x113D4, 0x113D5, STerm),
    (0x113E1, 0x113E2, Extend),
    (0x11400, 0x11434, OLetter),
    (0x11435, 0x11446, Extend),
    (0x11447, 0x1144A, OLetter),
    (0x1144B, 0x1144C, STerm),
    (0x11450, 0x11459, Numeric),
    (0x1145E, 0x1145E, Extend),
    (0x1145F, 0x11461, OLetter),
    (0x11480, 0x114AF, OLetter),
    (0x114B0, 0x114C3, Extend),
    (0x114C4, 0x114C5, OLetter),
    (0x114C7, 0x114C7, OLetter),
    (0x114D0, 0x114D9, Numeric),
    (0x11580, 0x115AE, OLetter),
    (0x115AF, 0x115B5, Extend),
    (0x115B8, 0x115C0, Extend),
    (0x115C2, 0x115C3, STerm),
    (0x115C9, 0x115D7, STerm),
    (0x115D8, 0x115DB, OLetter),
    (0x115DC, 0x115DD, Extend),
    (0x11600, 0x1162F, OLetter),
    (0x11630, 0x11640, Extend),
    (0x11641, 0x11642, STerm),
    (0x11644, 0x11644, OLetter),
    (0x11650, 0x11659, Numeric),
    (0x11680, 0x116AA, OLetter),
    (0x116AB, 0x116B7, Extend),
    (0x116B8, 0x116B8, OLetter),
    (0x116C0, 0x116C9, Numeric),
    (0x116D0, 0x116E3, Numeric),
    (0x11700, 0x1171A, OLetter),
    (0x1171D, 0x1172B, Extend),
    (0x11730, 0x11739, Numeric),
    (0x1173C, 0x1173E, STerm),
    (0x11740, 0x11746, OLetter),
    (0x11800, 0x1182B, OLetter),
    (0x1182C, 0x1183A, Extend),
    (0x118A0, 0x118BF, Upper),
    (0x118C0, 0x118DF, Lower),
    (0x118E0, 0x118E9, Numeric),
    (0x118FF, 0x11906, OLetter),
    (0x11909, 0x11909, OLetter),
    (0x1190C, 0x11913, OLetter),
    (0x11915, 0x11916, OLetter),
    (0x11918, 0x1192F, OLetter),
    (0x11930, 0x11935, Extend),
    (0x11937, 0x11938, Extend),
    (0x1193B, 0x1193E, Extend),
    (0x1193F, 0x1193F, OLetter),
    (0x11940, 0x11940, Extend),
    (0x11941, 0x11941, OLetter),
    (0x11942, 0x11943, Extend),
    (0x11944, 0x11944, STerm),
    (0x11946, 0x11946, STerm),
    (0x11950, 0x11959, Numeric),
    (0x119A0, 0x119A7, OLetter),
    (0x119AA, 0x119D0, OLetter),
    (0x119D1, 0x119D7, Extend),
    (0x119DA, 0x119E0, Extend),
    (0x119E1, 0x119E1, OLetter),
    (0x119E3, 0x119E3, OLetter),
    (0x119E4, 0x119E4, Extend),
    (0x11A00, 0x11A00, OLetter),
    (0x11A01, 0x11A0A, Extend),
    (0x11A0B, 0x11A32, OLetter),
    (0x11A33, 0x11A39, Extend),
    (0x11A3A, 0x11A3A, OLetter),
    (0x11A3B, 0x11A3E, Extend),
    (0x11A42, 0x11A43, STerm),
    (0x11A47, 0x11A47, Extend),
    (0x11A50, 0x11A50, OLetter),
    (0x11A51, 0x11A5B, Extend),
    (0x11A5C, 0x11A89, OLetter),
    (0x11A8A, 0x11A99, Extend),
    (0x11A9B, 0x11A9C, STerm),
    (0x11A9D, 0x11A9D, OLetter),
    (0x11AB0, 0x11AF8, OLetter),
    (0x11B60, 0x11B67, Extend),
    (0x11BC0, 0x11BE0, OLetter),
    (0x11BF0, 0x11BF9, Numeric),
    (0x11C00, 0x11C08, OLetter),
    (0x11C0A, 0x11C2E, OLetter),
    (0x11C2F, 0x11C36, Extend),
    (0x11C38, 0x11C3F, Extend),
    (0x11C40, 0x11C40, OLetter),
    (0x11C41, 0x11C42, STerm),
    (0x11C50, 0x11C59, Numeric),
    (0x11C72, 0x11C8F, OLetter),
    (0x11C92, 0x11CA7, Extend),
    (0x11CA9, 0x11CB6, Extend),
    (0x11D00, 0x11D06, OLetter),
    (0x11D08, 0x11D09, OLetter),
    (0x11D0B, 0x11D30, OLetter),
    (0x11D31, 0x11D36, Extend),
    (0x11D3A, 0x11D3A, Extend),
    (0x11D3C, 0x11D3D, Extend),
    (0x11D3F, 0x11D45, Extend),
    (0x11D46, 0x11D46, OLetter),
    (0x11D47, 0x11D47, Extend),
    (0x11D50, 0x11D59, Numeric),
    (0x11D60, 0x11D65, OLetter),
    (0x11D67, 0x11D68, OLetter),
    (0x11D6A, 0x11D89, OLetter),
    (0x11D8A, 0x11D8E, Extend),
    (0x11D90, 0x11D91, Extend),
    (0x11D93, 0x11D97, Extend),
    (0x11D98, 0x11D98, OLetter),
    (0x11DA0, 0x11DA9, Numeric),
    (0x11DB0, 0x11DDB, OLetter),
    (0x11DE0, 0x11DE9, Numeric),
    (0x11EE0, 0x11EF2, OLetter),
    (0x11EF3, 0x11EF6, Extend),
    (0x11EF7, 0x11EF8, STerm),
    (0x11F00, 0x11F01, Extend),
    (0x11F02, 0x11F02, OLetter),
    (0x11F03, 0x11F03, Extend),
    (0x11F04, 0x11F10, OLetter),
    (0x11F12, 0x11F33, OLetter),
    (0x11F34, 0x11F3A, Extend),
    (0x11F3E, 0x11F42, Extend),
    (0x11F43, 0x11F44, STerm),
    (0x11F50, 0x11F59, Numeric),
    (0x11F5A, 0x11F5A, Extend),
    (0x11FB0, 0x11FB0, OLetter),
    (0x12000, 0x12399, OLetter),
    (0x12400, 0x1246E, OLetter),
    (0x12480, 0x12543, OLetter),
    (0x12F90, 0x12FF0, OLetter),
    (0x13000, 0x1342F, OLetter),
    (0x13430, 0x1343F, Format),
    (0x13440, 0x13440, Extend),
    (0x13441, 0x13446, OLetter),
    (0x13447, 0x13455, Extend),
    (0x13460, 0x143FA, OLetter),
    (0x14400, 0x14646, OLetter),
    (0x16100, 0x1611D, OLetter),
    (0x1611E, 0x1612F, Extend),
    (0x16130, 0x16139, Numeric),
    (0x16800, 0x16A38, OLetter),
    (0x16A40, 0x16A5E, OLetter),
    (0x16A60, 0x16A69, Numeric),
    (0x16A6E, 0x16A6F, STerm),
    (0x16A70, 0x16ABE, OLetter),
    (0x16AC0, 0x16AC9, Numeric),
    (0x16AD0, 0x16AED, OLetter),
    (0x16AF0, 0x16AF4, Extend),
    (0x16AF5, 0x16AF5, STerm),
    (0x16B00, 0x16B2F, OLetter),
    (0x16B30, 0x16B36, Extend),
    (0x16B37, 0x16B38, STerm),
    (0x16B40, 0x16B43, OLetter),
    (0x16B44, 0x16B44, STerm),
    (0x16B50, 0x16B59, Numeric),
    (0x16B63, 0x16B77, OLetter),
    (0x16B7D, 0x16B8F, OLetter),
    (0x16D40, 0x16D6C, OLetter),
    (0x16D6E, 0x16D6F, STerm),
    (0x16D70, 0x16D79, Numeric),
    (0x16E40, 0x16E5F, Upper),
    (0x16E60, 0x16E7F, Lower),
    (0x16E98, 0x16E98, STerm),
    (0x16EA0, 0x16EB8, Upper),
    (0x16EBB, 0x16ED3, Lower),
    (0x16F00, 0x16F4A, OLetter),
    (0x16F4F, 0x16F4F, Extend),
    (0x16F50, 0x16F50, OLetter),
    (0x16F51, 0x16F87, Extend),
    (0x16F8F, 0x16F92, Extend),
    (0x16F93, 0x16F9F, OLetter),
    (0x16FE0, 0x16FE1, OLetter),
    (0x16FE3, 0x16FE3, OLetter),
    (0x16FE4, 0x16FE4, Extend),
    (0x16FF0, 0x16FF1, Extend),
    (0x16FF2, 0x16FF6, OLetter),
    (0x17000, 0x18CD5, OLetter),
    (0x18CFF, 0x18D1E, OLetter),
    (0x18D80, 0x18DF2, OLetter),
    (0x1AFF0, 0x1AFF3, OLetter),
    (0x1AFF5, 0x1AFFB, OLetter),
    (0x1AFFD, 0x1AFFE, OLetter),
    (0x1B000, 0x1B122, OLetter),
    (0x1B132, 0x1B132, OLetter),
    (0x1B150, 0x1B152, OLetter),
    (0x1B155, 0x1B155, OLetter),
    (0x1B164, 0x1B167, OLetter),
    (0x1B170, 0x1B2FB, OLetter),
    (0x1BC00, 0x1BC6A, OLetter),
    (0x1BC70, 0x1BC7C, OLetter),
    (0x1BC80, 0x1BC88, OLetter),
    (0x1BC90, 0x1BC99, OLetter),
    (0x1BC9D, 0x1BC9E, Extend),
    (0x1BC9F, 0x1BC9F, STerm),
    (0x1BCA0, 0x1BCA3, Format),
    (0x1CCF0, 0x1CCF9, Numeric),
    (0x1CF00, 0x1CF2D, Extend),
    (0x1CF30, 0x1CF46, Extend),
    (0x1D165, 0x1D169, Extend),
    (0x1D16D, 0x1D172, Extend),
    (0x1D173, 0x1D17A, Format),
    (0x1D17B, 0x1D182, Extend),
    (0x1D185, 0x1D18B, Extend),
    (0x1D1AA, 0x1D1AD, Extend),
    (0x1D242, 0x1D244, Extend),
    (0x1D400, 0x1D419, Upper),
    (0x1D41A, 0x1D433, Lower),
    (0x1D434, 0x1D44D, Upper),
    (0x1D44E, 0x1D454, Lower),
    (0x1D456, 0x1D467, Lower),
    (0x1D468, 0x1D481, Upper),
    (0x1D482, 0x1D49B, Lower),
    (0x1D49C, 0x1D49C, Upper),
    (0x1D49E, 0x1D49F, Upper),
    (0x1D4A2, 0x1D4A2, Upper),
    (0x1D4A5, 0x1D4A6, Upper),
    (0x1D4A9, 0x1D4AC, Upper),
    (0x1D4AE, 0x1D4B5, Upper),
    (0x1D4B6, 0x1D4B9, Lower),
    (0x1D4BB, 0x1D4BB, Lower),
    (0x1D4BD, 0x1D4C3, Lower),
    (0x1D4C5, 0x1D4CF, Lower),
    (0x1D4D0, 0x1D4E9, Upper),
    (0x1D4EA, 0x1D503, Lower),
    (0x1D504, 0x1D505, Upper),
    (0x1D507, 0x1D50A, Upper),
    (0x1D50D, 0x1D514, Upper),
    (0x1D516, 0x1D51C, Upper),
    (0x1D51E, 0x1D537, Lower),
    (0x1D538, 0x1D539, Upper),
    (0x1D53B, 0x1D53E, Upper),
    (0x1D540, 0x1D544, Upper),
    (0x1D546, 0x1D546, Upper),
    (0x1D54A, 0x1D550, Upper),
    (0x1D552, 0x1D56B, Lower),
    (0x1D56C, 0x1D585, Upper),
    (0x1D586, 0x1D59F, Lower),
    (0x1D5A0, 0x1D5B9, Upper),
    (0x1D5BA, 0x1D5D3, Lower),
    (0x1D5D4, 0x1D5ED, Upper),
    (0x1D5EE, 0x1D607, Lower),
    (0x1D608, 0x1D621, Upper),
    (0x1D622, 0x1D63B, Lower),
    (0x1D63C, 0x1D655, Upper),
    (0x1D656, 0x1D66F, Lower),
    (0x1D670, 0x1D689, Upper),
    (0x1D68A, 0x1D6A5, Lower),
    (0x1D6A8, 0x1D6C0, Upper),
    (0x1D6C2, 0x1D6DA, Lower),
    (0x1D6DC, 0x1D6E1, Lower),
    (0x1D6E2, 0x1D6FA, Upper),
    (0x1D6FC, 0x1D714, Lower),
    (0x1D716, 0x1D71B, Lower),
    (0x1D71C, 0x1D734, Upper),
    (0x1D736, 0x1D74E, Lower),
    (0x1D750, 0x1D755, Lower),
    (0x1D756, 0x1D76E, Upper),
    (0x1D770, 0x1D788, Lower),
    (0x1D78A, 0x1D78F, Lower),
    (0x1D790, 0x1D7A8, Upper),
    (0x1D7AA, 0x1D7C2, Lower),
    (0x1D7C4, 0x1D7C9, Lower),
    (0x1D7CA, 0x1D7CA, Upper),
    (0x1D7CB, 0x1D7CB, Lower),
    (0x1D7CE, 0x1D7FF, Numeric),
    (0x1DA00, 0x1DA36, Extend),
    (0x1DA3B, 0x1DA6C, Extend),
    (0x1DA75, 0x1DA75, Extend),
    (0x1DA84, 0x1DA84, Extend),
    (0x1DA88, 0x1DA88, STerm),
    (0x1DA9B, 0x1DA9F, Extend),
    (0x1DAA1, 0x1DAAF, Extend),
    (0x1DF00, 0x1DF09, Lower),
    (0x1DF0A, 0x1DF0A, OLetter),
    (0x1DF0B, 0x1DF1E, Lower),
    (0x1DF25, 0x1DF2A, Lower),
    (0x1E000, 0x1E006, Extend),
    (0x1E008, 0x1E018, Extend),
    (0x1E01B, 0x1E021, Extend),
    (0x1E023, 0x1E024, Extend),
    (0x1E026, 0x1E02A, Extend),
    (0x1E030, 0x1E06D, Lower),
    (0x1E08F, 0x1E08F, Extend),
    (0x1E100, 0x1E12C, OLetter),
    (0x1E130, 0x1E136, Extend),
    (0x1E137, 0x1E13D, OLetter),
    (0x1E140, 0x1E149, Numeric),
    (0x1E14E, 0x1E14E, OLetter),
    (0x1E290, 0x1E2AD, OLetter),
    (0x1E2AE, 0x1E2AE, Extend),
    (0x1E2C0, 0x1E2EB, OLetter),
    (0x1E2EC, 0x1E2EF, Extend),
    (0x1E2F0, 0x1E2F9, Numeric),
    (0x1E4D0, 0x1E4EB, OLetter),
    (0x1E4EC, 0x1E4EF, Extend),
    (0x1E4F0, 0x1E4F9, Numeric),
    (0x1E5D0, 0x1E5ED, OLetter),
    (0x1E5EE, 0x1E5EF, Extend),
    (0x1E5F0, 0x1E5F0, OLetter),
    (0x1E5F1, 0x1E5FA, Numeric),
    (0x1E6C0, 0x1E6DE, OLetter),
    (0x1E6E0, 0x1E6E2, OLetter),
    (0x1E6E3, 0x1E6E3, Extend),
    (0x1E6E4, 0x1E6E5, OLetter),
    (0x1E6E6, 0x1E6E6, Extend),
    (0x1E6E7, 0x1E6ED, OLetter),
    (0x1E6EE, 0x1E6EF, Extend),
    (0x1E6F0, 0x1E6F4, OLetter),
    (0x1E6F5, 0x1E6F5, Extend),
    (0x1E6FE, 0x1E6FF, OLetter),
    (0x1E7E0, 0x1E7E6, OLetter),
    (0x1E7E8, 0x1E7EB, OLetter),
    (0x1E7ED, 0x1E7EE, OLetter),
    (0x1E7F0, 0x1E7FE, OLetter),
    (0x1E800, 0x1E8C4, OLetter),
    (0x1E8D0, 0x1E8D6, Extend),
    (0x1E900, 0x1E921, Upper),
    (0x1E922, 0x1E943, Lower),
    (0x1E944, 0x1E94A, Extend),
    (0x1E94B, 0x1E94B, OLetter),
    (0x1E950, 0x1E959, Numeric),
    (0x1EE00, 0x1EE03, OLetter),
    (0x1EE05, 0x1EE1F, OLetter),
    (0x1EE21, 0x1EE22, OLetter),
    (0x1EE24, 0x1EE24, OLetter),
    (0x1EE27, 0x1EE27, OLetter),
    (0x1EE29, 0x1EE32, OLetter),
    (0x1EE34, 0x1EE37, OLetter),
    (0x1EE39, 0x1EE39, OLetter),
    (0x1EE3B, 0x1EE3B, OLetter),
    (0x1EE42, 0x1EE42, OLetter),
    (0x1EE47, 0x1EE47, OLetter),
    (0x1EE49, 0x1EE49, OLetter),
    (0x1EE4B, 0x1EE4B, OLetter),
    (0x1EE4D, 0x1EE4F, OLetter),
    (0x1EE51, 0x1EE52, OLetter),
    (0x1EE54, 0x1EE54, OLetter),
    (0x1EE57, 0x1EE57, OLetter),
    (0x1EE59, 0x1EE59, OLetter),
    (0x1EE5B, 0x1EE5B, OLetter),
    (0x1EE5D, 0x1EE5D, OLetter),
    (0x1EE5F, 0x1EE5F, OLetter),
    (0x1EE61, 0x1EE62, OLetter),
    (0x1EE64, 0x1EE64, OLetter),
    (0x1EE67, 0x1EE6A, OLetter),
    (0x1EE6C, 0x1EE72, OLetter),
    (0x1EE74, 0x1EE77, OLetter),
    (0x1EE79, 0x1EE7C, OLetter),
    (0x1EE7E, 0x1EE7E, OLetter),
    (0x1EE80, 0x1EE89, OLetter),
    (0x1EE8B, 0x1EE9B, OLetter),
    (0x1EEA1, 0x1EEA3, OLetter),
    (0x1EEA5, 0x1EEA9, OLetter),
    (0x1EEAB, 0x1EEBB, OLetter),
    (0x1F130, 0x1F149, Upper),
    (0x1F150, 0x1F169, Upper),
    (0x1F170, 0x1F189, Upper),
    (0x1F676, 0x1F678, Close),
    (0x1FBF0, 0x1FBF9, Numeric),
    (0x20000, 0x2A6DF, OLetter),
    (0x2A700, 0x2B81D, OLetter),
    (0x2B820, 0x2CEAD, OLetter),
    (0x2CEB0, 0x2EBE0, OLetter),
    (0x2EBF0, 0x2EE5D, OLetter),
    (0x2F800, 0x2FA1D, OLetter),
    (0x30000, 0x3134A, OLetter),
    (0x31350, 0x33479, OLetter),
    (0xE0001, 0xE0001, Format),
    (0xE0020, 0xE007F, Extend),
    (0xE0100, 0xE01EF, Extend),
]);
